//! # State Module
//!
//! Manages storefront state.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! gets its own state type and each command takes only the states it uses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Bridge (bridge.rs)                         │   │
//! │  │  owns one of each state, hands commands what they ask for       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌────────────────┬───────┴────────┬──────────────────┐             │
//! │     ▼                ▼                ▼                  ▼             │
//! │  ┌──────────┐  ┌─────────────┐  ┌──────────────┐  ┌──────────────┐     │
//! │  │ DbState  │  │ CartState   │  │ ConfigState  │  │ SessionState │     │
//! │  │          │  │             │  │              │  │              │     │
//! │  │ Database │  │ Arc<Mutex<  │  │ WhatsApp no. │  │ Mutex<       │     │
//! │  │ Media    │  │   Cart>>    │  │ store names  │  │   Language>  │     │
//! │  │ Store    │  │ + totals rx │  │ paths, URLs  │  │              │     │
//! │  └──────────┘  └─────────────┘  └──────────────┘  └──────────────┘     │
//! │                                                                         │
//! │  Thread Safety:                                                        │
//! │  - DbState: SqlitePool is Send + Sync                                  │
//! │  - CartState: Arc<Mutex<Cart>> for exclusive access                    │
//! │  - ConfigState: Read-only after init                                   │
//! │  - SessionState: Mutex<Language>                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod db;
mod session;

pub use cart::CartState;
pub use config::{default_data_dir, ConfigError, ConfigState, DEFAULT_PUBLIC_BASE_URL};
pub use db::DbState;
pub use session::SessionState;
