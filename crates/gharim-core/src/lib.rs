//! # gharim-core: Pure Business Logic for Gharim Store
//!
//! This crate is the **heart** of Gharim Store. It contains the cart model,
//! checkout validation and the WhatsApp order handoff as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Gharim Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (out of tree)                  │   │
//! │  │   Products ──► Product Detail ──► Cart ──► Checkout ──► Done    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ invoke bridge (JSON lines)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    list_products, add_to_cart, submit_order, upload_product     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gharim-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │   │  money  │ │  cart   │ │ validation │ │  order  │ │ deep  │ │   │
//! │  │   │ format  │ │  Cart   │ │ FieldErrors│ │ encoder │ │ link  │ │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gharim-db (Catalog Layer)                       │   │
//! │  │          SQLite products, migrations, product images            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Language, Section, Product)
//! - [`money`] - Money type (whole dinars) and currency formatting
//! - [`cart`] - The shopping cart and its totals
//! - [`governorate`] - The fixed list of Iraqi governorates
//! - [`i18n`] - Bilingual message table
//! - [`validation`] - Checkout form and listing validation
//! - [`order`] - Checkout form, order draft and WhatsApp message encoder
//! - [`deep_link`] - `wa.me` link builder
//! - [`checkout`] - validate → encode → link pipeline
//! - [`listing`] - Admin product listing form
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gharim_core::cart::Cart;
//! use gharim_core::deep_link::build_whatsapp_link;
//! use gharim_core::money::format_currency;
//! use gharim_core::Money;
//!
//! let cart = Cart::new();
//! assert_eq!(cart.cart_total(), Money::zero());
//!
//! let link = build_whatsapp_link("+964 770 123 4567", "hello world");
//! assert_eq!(link, "https://wa.me/9647701234567?text=hello%20world");
//!
//! assert!(!format_currency(Money::from_dinars(5000)).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod deep_link;
pub mod error;
pub mod governorate;
pub mod i18n;
pub mod listing;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gharim_core::Money` instead of
// `use gharim_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, ValidationError};
pub use governorate::Governorate;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Store name used in the order message when none is configured.
pub const DEFAULT_STORE_NAME_EN: &str = "Gharim Store";

/// Arabic store name used in the order message when none is configured.
pub const DEFAULT_STORE_NAME_AR: &str = "غريم ستور";

/// Maximum quantity of one product in the cart, after merging repeated adds.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Number of related products shown on a product detail view.
pub const RELATED_PRODUCTS_LIMIT: u32 = 3;
