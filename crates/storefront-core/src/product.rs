//! # Product Model
//!
//! The sellable item: an immutable record with a name, a base price and a
//! category-specific payload.
//!
//! ## Why a tagged variant instead of a trait hierarchy?
//! The three categories only differ in the payload they carry and in the
//! extra fragment they contribute to the display line. A [`Category`] enum
//! expresses that directly - no dynamic dispatch, no boxed trait objects -
//! while keeping the per-category pricing hook in one `match` (see
//! [`Product::price`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The category tag and its payload.
///
/// - `Phone` carries the handset model line
/// - `Computer` carries the processor description
/// - `Gadget` is a generic accessory with no extra payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phone { model: String },
    Computer { processor: String },
    Gadget,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Invariant
/// Products are immutable once constructed: the fields are private and only
/// accessors are exposed. Name uniqueness within a catalog is assumed by the
/// lookup path, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; also the lookup key within an inventory.
    name: String,

    /// List price before any per-category adjustment.
    base_price: Money,

    /// Category tag with its payload.
    category: Category,
}

impl Product {
    /// Creates a product.
    ///
    /// No validation of the price sign or name emptiness - the catalog is
    /// trusted input, and rejecting odd values is out of scope.
    pub fn new(name: impl Into<String>, base_price: Money, category: Category) -> Self {
        Product {
            name: name.into(),
            base_price,
            category,
        }
    }

    /// Returns the immutable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the list price before category adjustment.
    #[inline]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    /// Returns the category tag.
    #[inline]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the effective selling price.
    ///
    /// Per-category pricing hook: every category currently sells at base
    /// price (multiplier 1). The `match` is the extension point for future
    /// category-specific pricing; carts and recommendations already go
    /// through it rather than through [`Product::base_price`].
    pub fn price(&self) -> Money {
        match self.category {
            Category::Phone { .. } => self.base_price,
            Category::Computer { .. } => self.base_price,
            Category::Gadget => self.base_price,
        }
    }
}

/// One product per line: `Nume: <name>, Pret: <price>` plus
/// `, Model: <model>` for phones and `, Procesor: <processor>` for
/// computers. Gadgets use the base form.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nume: {}, Pret: {}", self.name, self.price())?;
        match &self.category {
            Category::Phone { model } => write!(f, ", Model: {}", model),
            Category::Computer { processor } => write!(f, ", Procesor: {}", processor),
            Category::Gadget => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_equals_base_price_for_every_category() {
        let price = Money::from_major(500);
        let phone = Product::new(
            "Samsung",
            price,
            Category::Phone {
                model: "Galaxy".into(),
            },
        );
        let computer = Product::new(
            "Dell",
            price,
            Category::Computer {
                processor: "Intel Core i7".into(),
            },
        );
        let gadget = Product::new("Husa", price, Category::Gadget);

        assert_eq!(phone.price(), price);
        assert_eq!(computer.price(), price);
        assert_eq!(gadget.price(), price);
    }

    #[test]
    fn test_display_phone() {
        let phone = Product::new(
            "Samsung",
            Money::from_major(500),
            Category::Phone {
                model: "Galaxy".into(),
            },
        );
        assert_eq!(
            phone.to_string(),
            "Nume: Samsung, Pret: 500.00, Model: Galaxy"
        );
    }

    #[test]
    fn test_display_computer() {
        let computer = Product::new(
            "Macbook",
            Money::from_major(2100),
            Category::Computer {
                processor: "Air2023".into(),
            },
        );
        assert_eq!(
            computer.to_string(),
            "Nume: Macbook, Pret: 2100.00, Procesor: Air2023"
        );
    }

    #[test]
    fn test_display_gadget_uses_base_form() {
        let gadget = Product::new("USB", Money::from_major(30), Category::Gadget);
        assert_eq!(gadget.to_string(), "Nume: USB, Pret: 30.00");
    }

    #[test]
    fn test_serializes_with_tagged_category() {
        let phone = Product::new(
            "Iphone",
            Money::from_major(1000),
            Category::Phone {
                model: "15 pro".into(),
            },
        );
        let json = serde_json::to_value(&phone).unwrap();
        assert_eq!(json["name"], "Iphone");
        assert_eq!(json["category"]["phone"]["model"], "15 pro");
    }
}
