//! # Cart
//!
//! The customer's ordered selection of catalog entries.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Menu Action              Cart State Change                │
//! │  ───────────              ─────────────────                │
//! │  Add to cart     ───────► entries.push(id)                 │
//! │  Show cart       ───────► (read only, via inventory)       │
//! │  Total           ───────► sum of price() over entries      │
//! │  Purchase        ───────► entries.clear()                  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries keep insertion order; adding the same product twice yields two
//!   entries (no quantity merging in this design).
//! - Entries are [`ProductId`] handles, never owned products: the inventory
//!   outlives every cart, so clearing a cart touches nothing it references.

use serde::{Deserialize, Serialize};

use crate::inventory::{Inventory, ProductId};
use crate::money::Money;
use crate::product::Product;

/// The shopping cart: an ordered list of catalog handles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<ProductId>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Adds a catalog entry to the cart. Always succeeds.
    pub fn add(&mut self, id: ProductId) {
        self.entries.push(id);
    }

    /// Sum of effective prices over all entries, in entry order.
    ///
    /// An empty cart totals zero.
    pub fn total(&self, inventory: &Inventory) -> Money {
        self.entries.iter().map(|&id| inventory[id].price()).sum()
    }

    /// Iterates over the referenced products for display, in entry order.
    pub fn products<'a>(&'a self, inventory: &'a Inventory) -> impl Iterator<Item = &'a Product> {
        self.entries.iter().map(move |&id| &inventory[id])
    }

    /// Removes all entries. The inventory is untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
