//! # Commands Module
//!
//! Every command the storefront frontend can invoke through the bridge.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog reads, section menu
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Order submission (WhatsApp handoff)
//! ├── admin.rs     ◄─── Product upload
//! └── config.rs    ◄─── Configuration, language toggle
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs the catalog and the language
//! async fn list_products(db: &DbState, session: &SessionState, ...)
//!
//! // Needs the cart, the operator number and the language
//! fn submit_order(cart: &CartState, config: &ConfigState, session: &SessionState, ...)
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
