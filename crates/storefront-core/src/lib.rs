//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the heart of Storefront. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Storefront Architecture                   │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │                  apps/cli (terminal)                 │  │
//! │  │     menu loop ──► seeding ──► logging setup          │  │
//! │  └─────────────────────────┬────────────────────────────┘  │
//! │                            │                               │
//! │  ┌─────────────────────────▼────────────────────────────┐  │
//! │  │           ★ storefront-core (THIS CRATE) ★           │  │
//! │  │                                                      │  │
//! │  │  ┌────────┐ ┌─────────┐ ┌───────────┐ ┌──────┐       │  │
//! │  │  │ money  │ │ product │ │ inventory │ │ cart │       │  │
//! │  │  │ Money  │ │ Product │ │ Inventory │ │ Cart │       │  │
//! │  │  │        │ │ Category│ │ ProductId │ │      │       │  │
//! │  │  └────────┘ └─────────┘ └───────────┘ └──────┘       │  │
//! │  │                                                      │  │
//! │  │  NO I/O • NO TERMINAL • NO FILES • PURE FUNCTIONS    │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - The sellable item: name, base price, tagged category
//! - [`inventory`] - The catalog; sole owner of every [`product::Product`]
//! - [`cart`] - Ordered selection of catalog handles plus derived total
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64), never floats
//! 4. **Single Owner**: The [`inventory::Inventory`] owns products for the whole
//!    process lifetime; carts hold copyable [`inventory::ProductId`] handles only
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Category, Inventory, Money, Product};
//!
//! let mut inventory = Inventory::new();
//! let phone = inventory.add(Product::new(
//!     "Samsung",
//!     Money::from_major(500),
//!     Category::Phone { model: "Galaxy".into() },
//! ));
//!
//! let mut cart = Cart::new();
//! cart.add(phone);
//! assert_eq!(cart.total(&inventory), Money::from_major(500));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod inventory;
pub mod money;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use inventory::{Inventory, ProductId};
pub use money::Money;
pub use product::{Category, Product};
