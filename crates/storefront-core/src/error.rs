//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message
//!
//! The taxonomy is deliberately tiny: the only recoverable condition in this
//! domain is a failed catalog lookup. The menu loop catches it, prints the
//! message and keeps going - it never terminates the process.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry matches the queried name.
    ///
    /// The display text is the fixed user-facing message; the queried name
    /// is carried for logging, not for display.
    #[error("Product not found in inventory")]
    ProductNotFound { name: String },
}

impl CoreError {
    /// The name that failed to resolve, when the error is a lookup failure.
    pub fn missing_name(&self) -> &str {
        match self {
            CoreError::ProductNotFound { name } => name,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
