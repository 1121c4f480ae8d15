//! # Starter Catalog
//!
//! Builds the fixed catalog the store opens with: two phones, two
//! computers, four gadgets. There is no persistence in this design, so the
//! same catalog is seeded on every run.

use storefront_core::{Category, Inventory, Money, Product};

/// Seeds the starter catalog, in display order.
pub fn starter_catalog() -> Inventory {
    let mut inventory = Inventory::new();

    inventory.add(Product::new(
        "Samsung",
        Money::from_major(500),
        Category::Phone {
            model: "Galaxy".into(),
        },
    ));
    inventory.add(Product::new(
        "Iphone",
        Money::from_major(1000),
        Category::Phone {
            model: "15 pro".into(),
        },
    ));
    inventory.add(Product::new(
        "Dell",
        Money::from_major(2000),
        Category::Computer {
            processor: "Intel Core i7".into(),
        },
    ));
    inventory.add(Product::new(
        "Macbook",
        Money::from_major(2100),
        Category::Computer {
            processor: "Air2023".into(),
        },
    ));
    inventory.add(Product::new("Husa", Money::from_major(50), Category::Gadget));
    inventory.add(Product::new(
        "Sticla_protectie",
        Money::from_major(40),
        Category::Gadget,
    ));
    inventory.add(Product::new("USB", Money::from_major(30), Category::Gadget));
    inventory.add(Product::new(
        "Casca",
        Money::from_major(55),
        Category::Gadget,
    ));

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_catalog_size() {
        let inventory = starter_catalog();
        assert_eq!(inventory.len(), 8);
    }

    #[test]
    fn test_seeded_products_round_trip_by_name() {
        let inventory = starter_catalog();
        for name in [
            "Samsung",
            "Iphone",
            "Dell",
            "Macbook",
            "Husa",
            "Sticla_protectie",
            "USB",
            "Casca",
        ] {
            let id = inventory.find_by_name(name).unwrap();
            assert_eq!(inventory[id].name(), name);
        }
    }

    #[test]
    fn test_recommendation_is_the_macbook() {
        let inventory = starter_catalog();
        let id = inventory.recommend().expect("catalog is not empty");
        assert_eq!(inventory[id].name(), "Macbook");
        assert_eq!(inventory[id].price(), Money::from_major(2100));
    }
}
