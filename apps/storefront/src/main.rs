//! # Gharim Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gharim Store                                     │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   Storefront UI (out of tree)                    │  │
//! │  │  • Product grid & sections   • Cart                              │  │
//! │  │  • Checkout form             • Admin upload                      │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                      JSON lines on stdin/stdout                         │
//! │  ┌──────────────────────────────▼───────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  main.rs ────► tokio runtime, exit code                          │  │
//! │  │  lib.rs ─────► logging, config, database, bridge                 │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  gharim.db (SQLite, WAL)  +  media/images/*                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match gharim_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gharim-storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
