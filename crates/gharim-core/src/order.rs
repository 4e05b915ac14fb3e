//! # Order Handoff
//!
//! Turns a validated checkout form and a cart snapshot into the bilingual
//! WhatsApp message the store operator receives.
//!
//! ## Message Layout
//! ```text
//! 🛍️ *New Order from Gharim Store*
//!
//! 👤 *Customer Information:*
//! Name: Ali Hassan
//! Phone: 07701234567
//! Governorate: Baghdad - بغداد
//! Address: Karrada, street 62
//! Email: ali@example.iq            (only when given)
//! Notes: ring twice                (only when given)
//!
//! 📦 *Products:*
//! 1. Dates
//!    Quantity: 2
//!    Price: ‏٥٬٠٠٠ د.ع.‏
//!    Subtotal: ‏١٠٬٠٠٠ د.ع.‏
//!
//! 💰 *Total: ‏١٠٬٠٠٠ د.ع.‏*
//!
//! Thank you for your order from Gharim Store! 🙏
//! ```
//!
//! The message carries no timestamp or random id: the same draft, cart and
//! language always give byte-identical output.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use ts_rs::TS;

use crate::cart::CartItem;
use crate::governorate::Governorate;
use crate::i18n::{self, MessageKey};
use crate::money::{format_currency, Money};
use crate::types::Language;
use crate::validation::{normalize_phone, validate_order_form, FieldErrors, OrderField};
use crate::{DEFAULT_STORE_NAME_AR, DEFAULT_STORE_NAME_EN};

// =============================================================================
// Checkout Form
// =============================================================================

/// The checkout form exactly as the shopper typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub customer_phone: String,

    /// Selected governorate (label, name or code).
    #[serde(default)]
    pub governorate: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Order Draft
// =============================================================================

/// Validated, typed checkout data. Transient: it only lives long enough to be
/// encoded into the order message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,

    /// Digits only, whitespace removed.
    pub customer_phone: String,

    pub governorate: Governorate,

    pub address: String,

    pub email: Option<String>,

    pub notes: Option<String>,
}

impl OrderDraft {
    /// Validates a raw form and maps it field by field.
    ///
    /// Blank optional fields become `None`; required fields are trimmed.
    pub fn try_from_form(form: &CheckoutForm, lang: Language) -> Result<Self, FieldErrors> {
        let mut errors = validate_order_form(form, lang);
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(governorate) = Governorate::parse(&form.governorate) else {
            errors.insert(
                OrderField::Governorate,
                i18n::text(MessageKey::GovernorateInvalid, lang),
            );
            return Err(errors);
        };

        Ok(OrderDraft {
            customer_name: form.customer_name.trim().to_string(),
            customer_phone: normalize_phone(&form.customer_phone),
            governorate,
            address: form.address.trim().to_string(),
            email: non_blank(form.email.as_deref()),
            notes: non_blank(form.notes.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// =============================================================================
// Message Encoder
// =============================================================================

/// Renders the WhatsApp order message.
///
/// The store names are constructor inputs so a deployment can rebrand
/// without touching the message table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMessageEncoder {
    pub store_name_en: String,
    pub store_name_ar: String,
}

impl Default for OrderMessageEncoder {
    fn default() -> Self {
        OrderMessageEncoder::new(DEFAULT_STORE_NAME_EN, DEFAULT_STORE_NAME_AR)
    }
}

impl OrderMessageEncoder {
    pub fn new(store_name_en: impl Into<String>, store_name_ar: impl Into<String>) -> Self {
        OrderMessageEncoder {
            store_name_en: store_name_en.into(),
            store_name_ar: store_name_ar.into(),
        }
    }

    fn store_name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.store_name_en,
            Language::Ar => &self.store_name_ar,
        }
    }

    /// Encodes an order.
    ///
    /// `total` is printed as given; the caller computes it from the same cart
    /// snapshot. Prices always use the store locale formatter.
    pub fn encode(
        &self,
        draft: &OrderDraft,
        items: &[CartItem],
        total: Money,
        lang: Language,
    ) -> String {
        let t = |key| i18n::text(key, lang);
        let store = self.store_name(lang);
        let mut message = String::new();

        // `write!` into a String cannot fail.
        let _ = writeln!(
            message,
            "🛍️ *{}*",
            i18n::text_with_store(MessageKey::OrderHeader, lang, store)
        );
        message.push('\n');

        let _ = writeln!(message, "👤 *{}*", t(MessageKey::CustomerInfoHeading));
        let _ = writeln!(message, "{}: {}", t(MessageKey::LabelName), draft.customer_name);
        let _ = writeln!(message, "{}: {}", t(MessageKey::LabelPhone), draft.customer_phone);
        let _ = writeln!(
            message,
            "{}: {}",
            t(MessageKey::LabelGovernorate),
            draft.governorate.label()
        );
        let _ = writeln!(message, "{}: {}", t(MessageKey::LabelAddress), draft.address);
        if let Some(email) = &draft.email {
            let _ = writeln!(message, "{}: {}", t(MessageKey::LabelEmail), email);
        }
        if let Some(notes) = draft.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = writeln!(message, "{}: {}", t(MessageKey::LabelNotes), notes);
        }

        message.push('\n');
        let _ = writeln!(message, "📦 *{}*", t(MessageKey::ProductsHeading));
        for (index, item) in items.iter().enumerate() {
            let _ = writeln!(message, "{}. {}", index + 1, item.name(lang));
            let _ = writeln!(message, "   {}: {}", t(MessageKey::LabelQuantity), item.quantity);
            let _ = writeln!(
                message,
                "   {}: {}",
                t(MessageKey::LabelPrice),
                format_currency(item.unit_price)
            );
            let _ = writeln!(
                message,
                "   {}: {}",
                t(MessageKey::LabelSubtotal),
                format_currency(item.line_total())
            );
            message.push('\n');
        }

        let _ = writeln!(
            message,
            "💰 *{}: {}*",
            t(MessageKey::LabelTotal),
            format_currency(total)
        );
        message.push('\n');
        message.push_str(&i18n::text_with_store(MessageKey::OrderThanks, lang, store));

        message
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
