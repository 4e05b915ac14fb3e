//! # Checkout Command
//!
//! Turns the cart and the checkout form into a WhatsApp handoff.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          submit_order                                   │
//! │                                                                         │
//! │  CheckoutForm ──► validate ──► OrderDraft ──► encode ──► wa.me link     │
//! │                      │                                       │          │
//! │                      ▼                                       ▼          │
//! │              INVALID_FORM / CART_EMPTY             cart cleared,        │
//! │              (cart untouched)                      success notice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The frontend opens `link` in a new window; the message it carries is the
//! only record of the order.

use serde::Serialize;
use tracing::{debug, info};

use gharim_core::checkout::prepare_order;
use gharim_core::i18n::{self, MessageKey};
use gharim_core::money::format_currency;
use gharim_core::order::CheckoutForm;
use gharim_core::Money;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, SessionState};

/// What the shopper sees after sending an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmitted {
    /// `https://wa.me/...` link to open.
    pub link: String,
    pub message: String,
    pub total: Money,
    pub total_display: String,
    /// "Order Sent Successfully!"
    pub title: String,
    /// Thank-you text for the confirmation screen.
    pub notice: String,
    /// Store name in the shopper's language, for the confirmation header.
    pub store_name: String,
}

/// Validates the form, builds the order link and clears the cart.
///
/// The cart is only cleared once a link was produced; a rejected form
/// leaves it as it was.
///
/// ## Errors
/// - `CART_EMPTY` when there is nothing to order
/// - `INVALID_FORM` with a message per invalid field
pub fn submit_order(
    cart: &CartState,
    config: &ConfigState,
    session: &SessionState,
    form: CheckoutForm,
) -> Result<OrderSubmitted, ApiError> {
    let lang = session.language();
    debug!(language = %lang, "submit_order command");

    let encoder = config.encoder();
    let handoff = cart
        .with_cart_mut(|c| {
            let handoff = prepare_order(c, &form, lang, &config.order_whatsapp, &encoder);
            if handoff.is_ok() {
                c.clear_cart();
            }
            handoff
        })
        .map_err(|err| ApiError::checkout(err, lang))?;

    info!(
        lines = handoff.lines.len(),
        total = handoff.total.dinars(),
        "Order handed off to WhatsApp"
    );

    Ok(OrderSubmitted {
        total_display: format_currency(handoff.total),
        title: i18n::text(MessageKey::OrderSent, lang).to_string(),
        notice: i18n::text(MessageKey::OrderSentDetail, lang).to_string(),
        store_name: config.store_name(lang).to_string(),
        link: handoff.link,
        message: handoff.message,
        total: handoff.total,
    })
}
