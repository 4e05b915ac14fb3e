//! # gharim-db: Catalog Layer for Gharim Store
//!
//! This crate provides the product catalog and the product image store.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gharim Store Data Flow                             │
//! │                                                                         │
//! │  Storefront Command (list_products, upload_product)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     gharim-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories │    │  MediaStore  │   │   │
//! │  │   │   (pool.rs)   │◄───│ (product.rs)  │    │  (media.rs)  │   │   │
//! │  │   │  SqlitePool   │    │ ProductRepo   │    │ images/*.jpg │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │           ▲                                                     │   │
//! │  │           └── migrations (001_catalog.sql, embedded)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite database + media directory under the app data dir      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product repository
//! - [`media`] - Product image files and their public URLs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gharim_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/gharim.db")).await?;
//!
//! let sweets = db.products().list(Some("sweets")).await?;
//! let product = db.products().get_by_id("uuid-here").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod media;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use media::{MediaStore, StoredImage};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::{generate_product_id, ProductRepository};
