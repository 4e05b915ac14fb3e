//! # Database Migrations
//!
//! The files in `migrations/sqlite/` are compiled into the binary and applied
//! in file-name order when the catalog opens. sqlx records each applied file
//! (with its checksum) in `_sqlx_migrations`, so reopening an up-to-date
//! catalog runs nothing.
//!
//! ```text
//! migrations/sqlite/
//! └── 001_catalog.sql   products table, section + recency indexes
//! ```
//!
//! Schema changes go in a new `NNN_description.sql`; an applied file must
//! never be edited, its checksum would no longer match.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies every migration not yet recorded in `_sqlx_migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    MIGRATOR.run(pool).await?;
    info!(migrations = MIGRATOR.migrations.len(), "Catalog schema up to date");
    Ok(())
}

/// `(embedded, applied)` migration counts.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    // No bookkeeping table yet means nothing applied
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((MIGRATOR.migrations.len(), applied as usize))
}
