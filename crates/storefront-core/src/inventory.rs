//! # Inventory
//!
//! The master catalog: an insertion-ordered collection of [`Product`]s and
//! the sole owner of their lifetime.
//!
//! ## Ownership Model
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Inventory ──owns──► Vec<Product>                          │
//! │                                                            │
//! │  Cart ──holds──► ProductId (copyable index, non-owning)    │
//! │                                                            │
//! │  ProductIds are minted only by Inventory::add, so every    │
//! │  handle a cart can hold refers to a live catalog slot.     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//! Products are never removed, so a `ProductId` stays valid for the life of
//! the inventory that issued it.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Product Handle
// =============================================================================

/// Opaque, copyable handle to a product in an [`Inventory`].
///
/// This is the "non-owning reference" carts store: cheap to copy, impossible
/// to dangle (the catalog never shrinks) and impossible to forge outside the
/// crate (the constructor is crate-private).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub(crate) usize);

// =============================================================================
// Inventory
// =============================================================================

/// The catalog of products, in insertion order (which is display order).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Appends a product to the catalog and returns its handle.
    ///
    /// Always succeeds; O(1) amortized. Name uniqueness is assumed, not
    /// enforced - duplicate names simply shadow each other in lookups.
    pub fn add(&mut self, product: Product) -> ProductId {
        let id = ProductId(self.items.len());
        self.items.push(product);
        id
    }

    /// Returns the product behind a handle.
    ///
    /// `None` only for a handle minted by a different inventory.
    #[inline]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.get(id.0)
    }

    /// Iterates over all products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the first product whose name exactly equals `name`.
    ///
    /// Linear scan in insertion order. Comparison is exact: case-sensitive,
    /// no trimming. Fails with [`CoreError::ProductNotFound`] when nothing
    /// matches - a recoverable condition the caller converts to a message.
    pub fn find_by_name(&self, name: &str) -> CoreResult<ProductId> {
        self.items
            .iter()
            .position(|product| product.name() == name)
            .map(ProductId)
            .ok_or_else(|| CoreError::ProductNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the highest-priced product, or `None` for an empty catalog.
    ///
    /// Strict-greater scan: ties resolve to the first-added maximum. The
    /// empty case is an explicit `None` the caller must handle, not a crash.
    pub fn recommend(&self) -> Option<ProductId> {
        let mut best: Option<(ProductId, Money)> = None;
        for (index, product) in self.items.iter().enumerate() {
            let price = product.price();
            let beats_current = match best {
                Some((_, best_price)) => price > best_price,
                None => true,
            };
            if beats_current {
                best = Some((ProductId(index), price));
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Direct indexing for handles minted by this inventory.
///
/// Panics on a foreign handle; carts only ever hold handles from the single
/// process-lifetime inventory, so the CLI path cannot hit that.
impl Index<ProductId> for Inventory {
    type Output = Product;

    #[inline]
    fn index(&self, id: ProductId) -> &Product {
        &self.items[id.0]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::Category;

    fn phone(name: &str, major: i64) -> Product {
        Product::new(
            name,
            Money::from_major(major),
            Category::Phone {
                model: format!("{name}-model"),
            },
        )
    }

    #[test]
    fn test_add_then_find_round_trips() {
        let mut inventory = Inventory::new();
        let id = inventory.add(phone("Samsung", 500));

        let found = inventory.find_by_name("Samsung").unwrap();
        assert_eq!(found, id);
        assert_eq!(inventory[found].name(), "Samsung");
        assert_eq!(inventory[found].price(), Money::from_major(500));
    }

    #[test]
    fn test_find_is_case_sensitive_and_exact() {
        let mut inventory = Inventory::new();
        inventory.add(phone("Samsung", 500));

        assert!(inventory.find_by_name("samsung").is_err());
        assert!(inventory.find_by_name(" Samsung").is_err());
        assert!(inventory.find_by_name("Samsung").is_ok());
    }

    #[test]
    fn test_find_missing_name_fails_with_not_found() {
        let mut inventory = Inventory::new();
        inventory.add(phone("Samsung", 500));

        let err = inventory.find_by_name("Nokia").unwrap_err();
        assert_eq!(err.to_string(), "Product not found in inventory");
        assert_eq!(err.missing_name(), "Nokia");
    }

    #[test]
    fn test_find_returns_first_match_in_insertion_order() {
        let mut inventory = Inventory::new();
        let first = inventory.add(phone("Samsung", 500));
        inventory.add(phone("Samsung", 999));

        assert_eq!(inventory.find_by_name("Samsung").unwrap(), first);
    }

    #[test]
    fn test_recommend_empty_inventory_is_none() {
        let inventory = Inventory::new();
        assert!(inventory.recommend().is_none());
    }

    #[test]
    fn test_recommend_returns_highest_price() {
        let mut inventory = Inventory::new();
        inventory.add(phone("Samsung", 500));
        let top = inventory.add(phone("Macbook", 2100));
        inventory.add(phone("Dell", 2000));

        assert_eq!(inventory.recommend(), Some(top));
    }

    #[test]
    fn test_recommend_tie_resolves_to_first_added() {
        let mut inventory = Inventory::new();
        let first = inventory.add(phone("A", 2100));
        inventory.add(phone("B", 2100));

        assert_eq!(inventory.recommend(), Some(first));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(phone("Samsung", 500));
        inventory.add(phone("Iphone", 1000));

        let names: Vec<_> = inventory.iter().map(Product::name).collect();
        assert_eq!(names, ["Samsung", "Iphone"]);
    }
}
