//! # Database State
//!
//! Wraps the catalog `Database` and the product `MediaStore` for use in
//! commands.
//!
//! ## Thread Safety
//! The `Database` struct from `gharim-db` contains a `SqlitePool` which
//! is inherently thread-safe, and the media store only holds paths.
//! Multiple commands can run concurrently without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_products(
//!     db: &DbState,
//!     section: Option<String>,
//! ) -> Result<Vec<Product>, ApiError> {
//!     Ok(db.inner().products().list(section.as_deref()).await?)
//! }
//! ```

use gharim_db::{Database, MediaStore};

/// Catalog handles shared by the product and admin commands.
#[derive(Debug)]
pub struct DbState {
    db: Database,
    media: MediaStore,
}

impl DbState {
    pub fn new(db: Database, media: MediaStore) -> Self {
        DbState { db, media }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Returns the product image store.
    pub fn media(&self) -> &MediaStore {
        &self.media
    }
}
