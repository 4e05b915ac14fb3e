//! # Gharim Storefront Library
//!
//! Application layer of Gharim Store: loads configuration, opens the
//! catalog and serves storefront commands over the JSON-lines bridge.
//!
//! ## Module Organization
//! ```text
//! gharim_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── bridge.rs       ◄─── stdin/stdout request loop, command routing
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Catalog database + media store
//! │   ├── cart.rs     ◄─── Session cart
//! │   ├── config.rs   ◄─── GHARIM_* configuration
//! │   └── session.rs  ◄─── Interface language
//! ├── commands/
//! │   ├── product.rs  ◄─── Catalog reads, section menu
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── WhatsApp order handoff
//! │   ├── admin.rs    ◄─── Product upload
//! │   └── config.rs   ◄─── Config and language toggle
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use std::path::Path;

use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge::Bridge;
use gharim_db::{Database, DbConfig, MediaStore};
use state::{ConfigState, DbState};

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,gharim=debug,sqlx=warn; override with RUST_LOG      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • GHARIM_ORDER_WHATSAPP is required                                 │
/// │     • Paths default to the platform data directory                      │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Open Media Store ─────────────────────────────────────────────────► │
/// │                                                                         │
/// │  5. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one response per stdout line     │
/// │     • Returns when stdin closes                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Gharim Store storefront");

    let config = ConfigState::from_env()?;
    info!(
        db_path = %config.db_path.display(),
        media_dir = %config.media_dir.display(),
        language = %config.default_language,
        "Configuration loaded"
    );

    let bridge = open(config).await?;

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    bridge.serve(stdin, stdout).await?;
    bridge.close().await;

    info!("Storefront stopped");
    Ok(())
}

/// Opens the catalog and media store described by `config`.
pub async fn open(config: ConfigState) -> Result<Bridge, Box<dyn std::error::Error>> {
    ensure_parent_dir(&config.db_path).await?;

    let db = Database::new(DbConfig::new(&config.db_path)).await?;
    info!("Database connected and migrations applied");

    let media = MediaStore::new(&config.media_dir, &config.public_base_url).await?;

    Ok(Bridge::new(DbState::new(db, media), config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gharim=trace` - Show trace for gharim crates only
/// - Default: `info,gharim=debug,sqlx=warn`
///
/// Output goes to stderr; stdout belongs to the bridge.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gharim=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await,
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_catalog_and_media_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().to_path_buf();
        let config = ConfigState::from_lookup(
            |key| (key == "GHARIM_ORDER_WHATSAPP").then(|| "9647700000000".to_string()),
            Some(data.as_path()),
        )
        .unwrap();

        let bridge = open(config).await.unwrap();

        assert!(data.join("gharim.db").exists());
        assert!(data.join("media").join("images").is_dir());
        let ok = bridge
            .dispatch("list_products", serde_json::Value::Null)
            .await
            .unwrap();
        assert_eq!(ok, serde_json::json!([]));
    }
}
