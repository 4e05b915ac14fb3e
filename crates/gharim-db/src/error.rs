//! # Catalog Errors
//!
//! One error type for the product table and the image directory. The
//! storefront turns it into an `ApiError`; shoppers only ever see the
//! generic wording, the detail goes to the log.
//!
//! ```text
//! sqlx::Error ──┐
//! io::Error ────┼──► DbError ──► ApiError {code, message}
//! MigrateError ─┘
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// No product (or other row) with this id. Raised by
    /// `ProductRepository::require`, not by plain lookups which return `None`.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A product id was inserted twice.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// The products table refused the row (`price >= 0`).
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// The catalog file could not be opened or created.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Every pooled connection stayed busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// An uploaded image could not be written or read back.
    #[error("Media storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// `value` is the offending id; SQLite only reports the column.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Sorts a SQLite error message into the constraint variants.
///
/// SQLite words these as `UNIQUE constraint failed: products.id` and
/// `CHECK constraint failed: price >= 0`; anything else is a failed query.
fn classify_sqlite_message(msg: &str) -> DbError {
    if let Some(column) = msg.strip_prefix("UNIQUE constraint failed: ") {
        return DbError::duplicate(column, "unknown");
    }

    if msg.starts_with("CHECK constraint failed") {
        return DbError::ConstraintViolation {
            message: msg.to_string(),
        };
    }

    DbError::QueryFailed(msg.to_string())
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),
            sqlx::Error::Database(db_err) => classify_sqlite_message(db_err.message()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("catalog is closed".to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Product", "p-1");
        assert_eq!(err.to_string(), "Product not found: p-1");
    }

    #[test]
    fn test_sqlite_messages_are_classified() {
        match classify_sqlite_message("UNIQUE constraint failed: products.id") {
            DbError::UniqueViolation { field, .. } => assert_eq!(field, "products.id"),
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            classify_sqlite_message("CHECK constraint failed: price >= 0"),
            DbError::ConstraintViolation { .. }
        ));
        assert!(matches!(
            classify_sqlite_message("no such table: products"),
            DbError::QueryFailed(_)
        ));
    }

    #[test]
    fn test_closed_pool_and_io_errors() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DbError = io.into();
        assert!(matches!(err, DbError::Storage(_)));
    }
}
