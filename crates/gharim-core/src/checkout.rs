//! # Checkout Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        prepare_order                                    │
//! │                                                                         │
//! │   Cart ──► empty? ──────────────────────────► CheckoutError::EmptyCart  │
//! │              │                                                          │
//! │   Form ──► validate_order_form ──► errors? ─► CheckoutError::InvalidForm│
//! │              │                                                          │
//! │              ▼                                                          │
//! │         OrderDraft + snapshot(lines, total)                             │
//! │              │                                                          │
//! │              ▼                                                          │
//! │         OrderMessageEncoder::encode ──► build_whatsapp_link             │
//! │              │                                                          │
//! │              ▼                                                          │
//! │         OrderHandoff { link, message, total, lines }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This step does not touch the cart. The caller clears it once the handoff
//! exists, so a failed checkout never loses the shopper's selection.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::deep_link::build_whatsapp_link;
use crate::i18n::{self, MessageKey};
use crate::money::Money;
use crate::order::{CheckoutForm, OrderDraft, OrderMessageEncoder};
use crate::types::Language;
use crate::validation::FieldErrors;

/// Why a checkout could not produce a handoff.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    /// One entry per invalid form field.
    #[error("Checkout form has {} invalid field(s)", .0.len())]
    InvalidForm(FieldErrors),
}

impl CheckoutError {
    /// Shopper-facing summary in the given language.
    pub fn localized(&self, lang: Language) -> String {
        match self {
            CheckoutError::EmptyCart => i18n::text(MessageKey::CartEmpty, lang).to_string(),
            CheckoutError::InvalidForm(errors) => errors
                .iter()
                .map(|(_, msg)| msg)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Everything needed to hand an order to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderHandoff {
    /// `https://wa.me/...` link to open.
    pub link: String,

    /// The plain-text message embedded in the link.
    pub message: String,

    pub total: Money,

    /// Snapshot of the cart at submission time.
    pub lines: Vec<CartItem>,
}

/// Validates, encodes and links an order.
///
/// ## Errors
/// - [`CheckoutError::EmptyCart`] when the cart has no lines
/// - [`CheckoutError::InvalidForm`] with every invalid field
pub fn prepare_order(
    cart: &Cart,
    form: &CheckoutForm,
    lang: Language,
    destination: &str,
    encoder: &OrderMessageEncoder,
) -> Result<OrderHandoff, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let draft = OrderDraft::try_from_form(form, lang).map_err(CheckoutError::InvalidForm)?;

    let lines = cart.items().to_vec();
    let total = cart.cart_total();
    let message = encoder.encode(&draft, &lines, total, lang);
    let link = build_whatsapp_link(destination, &message);

    Ok(OrderHandoff {
        link,
        message,
        total,
        lines,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_currency;
    use crate::types::Product;
    use crate::validation::OrderField;
    use chrono::Utc;

    fn dates() -> Product {
        Product {
            id: "p1".to_string(),
            name_en: "Dates".to_string(),
            name_ar: "تمر".to_string(),
            description_en: None,
            description_ar: None,
            price: 5000,
            image_url: "https://img.example/p1.jpg".to_string(),
            section: "sweets".to_string(),
            created_at: Utc::now(),
        }
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Ali Hassan".to_string(),
            customer_phone: "07701234567".to_string(),
            governorate: "Baghdad - بغداد".to_string(),
            address: "Karrada, street 62".to_string(),
            email: None,
            notes: None,
        }
    }

    #[test]
    fn test_end_to_end_handoff() {
        let mut cart = Cart::new();
        cart.add_to_cart(&dates(), 2).unwrap();

        let handoff = prepare_order(
            &cart,
            &valid_form(),
            Language::En,
            "+964 770 000 0000",
            &OrderMessageEncoder::default(),
        )
        .unwrap();

        let ten_thousand = format_currency(Money::from_dinars(10_000));
        assert_eq!(handoff.total, Money::from_dinars(10_000));
        assert!(handoff.message.contains("Quantity: 2"));
        assert!(handoff.message.contains(&format!("Subtotal: {}", ten_thousand)));
        assert!(handoff.message.contains(&format!("Total: {}", ten_thousand)));

        let (prefix, encoded) = handoff.link.split_once("?text=").unwrap();
        assert_eq!(prefix, "https://wa.me/9647700000000");
        assert_eq!(urlencoding::decode(encoded).unwrap(), handoff.message);
        assert_eq!(handoff.lines.len(), 1);

        // Preparing an order leaves the cart alone.
        assert_eq!(cart.cart_count(), 2);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = prepare_order(
            &Cart::new(),
            &valid_form(),
            Language::Ar,
            "964",
            &OrderMessageEncoder::default(),
        )
        .unwrap_err();

        assert_eq!(err, CheckoutError::EmptyCart);
        assert_eq!(err.localized(Language::Ar), "العلاگه فارغة");
    }

    #[test]
    fn test_invalid_form_returns_all_field_errors() {
        let mut cart = Cart::new();
        cart.add_to_cart(&dates(), 1).unwrap();

        let mut form = valid_form();
        form.customer_phone = "08701234567".to_string();
        form.address = " ".to_string();

        let err = prepare_order(
            &cart,
            &form,
            Language::En,
            "964",
            &OrderMessageEncoder::default(),
        )
        .unwrap_err();

        match err {
            CheckoutError::InvalidForm(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(OrderField::CustomerPhone));
                assert!(errors.contains(OrderField::Address));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
