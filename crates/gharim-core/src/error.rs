//! # Error Types
//!
//! ```text
//! gharim-core
//! ├── ValidationError   one bad value (cart quantity, listing field)
//! ├── CoreError         domain failure, wraps ValidationError
//! └── CheckoutError     (checkout.rs) empty cart / invalid checkout form
//!
//! gharim-db             DbError
//! storefront            ApiError {code, message}  ◄── what the frontend sees
//! ```
//!
//! Checkout form problems are NOT reported through these types: they are
//! collected per field in [`crate::validation::FieldErrors`] so the form can
//! show every problem at once.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart or detail request named an id the catalog does not have,
    /// typically a product removed after the shopper opened its page.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single value was rejected. `field` names the form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// e.g. a price of `12.5` or `five`
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// e.g. an unknown section tag or image extension
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// The rejected field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}
