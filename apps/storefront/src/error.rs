//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Gharim Store                           │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"cmd":"submit_order"}                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::QueryFailed("...") ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Checkout Error? ─── CheckoutError::InvalidForm ─ ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"id":7,"error":{"code":"INVALID_FORM","message":"...",                │
//! │                   "fields":{"customerPhone":"Invalid phone number"}}}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checkout and listing failures are shopper- or admin-facing, so they are
//! built in the session language with [`ApiError::checkout`] and
//! [`ApiError::listing`]. Everything else uses the `From` impls.

use serde::Serialize;

use gharim_core::checkout::CheckoutError;
use gharim_core::listing::listing_error_message;
use gharim_core::validation::FieldErrors;
use gharim_core::{CoreError, Language, ValidationError};
use gharim_db::DbError;

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 3f2a..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages when a checkout form was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Checkout form has invalid fields (see `fields`)
    InvalidForm,

    /// Checkout attempted with nothing in the cart
    CartEmpty,

    /// Database operation failed
    DatabaseError,

    /// Reading or writing a product image failed
    StorageError,

    /// Configuration missing or invalid
    ConfigError,

    /// Unknown command or malformed arguments
    BadRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Checkout failure, worded in the shopper's language.
    pub fn checkout(err: CheckoutError, lang: Language) -> Self {
        let message = err.localized(lang);
        match err {
            CheckoutError::EmptyCart => ApiError::new(ErrorCode::CartEmpty, message),
            CheckoutError::InvalidForm(fields) => ApiError {
                code: ErrorCode::InvalidForm,
                message,
                fields: Some(fields),
            },
        }
    }

    /// Admin listing failure, e.g. `❌ Error: Please select an image`.
    pub fn listing(err: &ValidationError, lang: Language) -> Self {
        ApiError::validation(listing_error_message(err, lang))
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConstraintViolation { message } => {
                tracing::warn!("Constraint violation: {}", message);
                ApiError::new(ErrorCode::ValidationError, "Invalid product data")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Storage(e) => {
                tracing::error!("Media storage failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Image storage failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid arguments: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use gharim_core::validation::OrderField;

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: ApiError = DbError::not_found("Product", "p-1").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-1");
    }

    #[test]
    fn test_core_errors() {
        let err: ApiError = CoreError::ProductNotFound("p-9".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_storage_error_hides_io_detail() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/srv/media");
        let err: ApiError = DbError::Storage(io).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("/srv/media"));
    }

    #[test]
    fn test_checkout_error_carries_fields() {
        let mut fields = FieldErrors::new();
        fields.insert(OrderField::CustomerPhone, "Invalid phone number");

        let err = ApiError::checkout(CheckoutError::InvalidForm(fields), Language::En);
        assert_eq!(err.code, ErrorCode::InvalidForm);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_FORM");
        assert_eq!(json["fields"]["customerPhone"], "Invalid phone number");
    }

    #[test]
    fn test_empty_cart_is_localized() {
        let err = ApiError::checkout(CheckoutError::EmptyCart, Language::En);
        assert_eq!(err.code, ErrorCode::CartEmpty);
        assert_eq!(err.message, "Your cart is empty");

        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_listing_error_message() {
        let err = ApiError::listing(
            &ValidationError::Required {
                field: "image".to_string(),
            },
            Language::En,
        );
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "❌ Error: Please select an image");
    }

    #[test]
    fn test_config_error() {
        let err: ApiError = ConfigError::MissingRequired("GHARIM_ORDER_WHATSAPP".to_string()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("GHARIM_ORDER_WHATSAPP"));
    }
}
