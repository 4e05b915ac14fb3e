//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Key Operations
//! - List by section (or everything for "All Products")
//! - Fetch one product for the detail page
//! - Related products (same section, the product itself excluded)
//! - Insert from the admin upload
//!
//! ## Page → Query
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Which Page Runs Which Query                          │
//! │                                                                         │
//! │  /products          ──► list(None)            newest first              │
//! │  /coffee, /sweets   ──► list(Some(section))   newest first              │
//! │  /product/{id}      ──► get_by_id(id)                                   │
//! │                     └─► related(&product, 3)                            │
//! │  /admin (submit)    ──► insert(&product)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries are checked at runtime and mapped through `Product`'s `FromRow`
//! derive, so building the crate never needs a live database.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use gharim_core::Product;

/// Column list shared by every product SELECT.
const PRODUCT_COLUMNS: &str = r#"
    id,
    name_en,
    name_ar,
    description_en,
    description_ar,
    price,
    image_url,
    section,
    created_at
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // Everything in the sweets section
/// let sweets = repo.list(Some("sweets")).await?;
///
/// // Get by ID
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists products, newest first.
    ///
    /// ## Arguments
    /// * `section` - Section tag to filter on; `None` lists every product
    pub async fn list(&self, section: Option<&str>) -> DbResult<Vec<Product>> {
        let section = section.map(str::trim).filter(|s| !s.is_empty());

        debug!(section = ?section, "Listing products");

        let products = match section {
            Some(section) => {
                let sql = format!(
                    "SELECT {} FROM products WHERE section = ?1 \
                     ORDER BY created_at DESC, rowid DESC",
                    PRODUCT_COLUMNS
                );
                sqlx::query_as::<_, Product>(&sql)
                    .bind(section)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM products ORDER BY created_at DESC, rowid DESC",
                    PRODUCT_COLUMNS
                );
                sqlx::query_as::<_, Product>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLUMNS);

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by ID, failing with `NotFound` when it doesn't exist.
    pub async fn require(&self, id: &str) -> DbResult<Product> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Products from the same section as `product`, excluding it.
    pub async fn related(&self, product: &Product, limit: u32) -> DbResult<Vec<Product>> {
        debug!(id = %product.id, section = %product.section, limit, "Fetching related products");

        let sql = format!(
            "SELECT {} FROM products WHERE section = ?1 AND id <> ?2 \
             ORDER BY created_at DESC, rowid DESC LIMIT ?3",
            PRODUCT_COLUMNS
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.section)
            .bind(&product.id)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Arguments
    /// * `product` - Product to insert (id should be generated beforehand)
    ///
    /// ## Returns
    /// * `Ok(Product)` - The inserted product
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    /// * `Err(DbError::ConstraintViolation)` - Negative price
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(id = %product.id, section = %product.section, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name_en, name_ar, description_en, description_ar,
                price, image_url, section, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8, ?9
            )
            "#,
        )
        .bind(&product.id)
        .bind(&product.name_en)
        .bind(&product.name_ar)
        .bind(&product.description_en)
        .bind(&product.description_ar)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(&product.section)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { field, .. } => DbError::duplicate(field, &product.id),
            other => other,
        })?;

        Ok(product.clone())
    }

    /// Counts catalog products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
///
/// ## Usage
/// ```rust,ignore
/// let id = generate_product_id();
/// let product = listing.into_product(id, image_url, Utc::now());
/// ```
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
