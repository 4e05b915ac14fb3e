//! # Validation Module
//!
//! Input validation for Gharim Store.
//!
//! ## Two Styles of Validation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Styles                                  │
//! │                                                                         │
//! │  Checkout form (shopper)                                               │
//! │  ├── validate_order_form(form, lang) → FieldErrors                     │
//! │  ├── Reports EVERY invalid field in one pass                           │
//! │  └── Messages are bilingual, looked up in the i18n table               │
//! │                                                                         │
//! │  Single values (cart quantity, admin listing)                          │
//! │  ├── validate_quantity / validate_price / validate_section / ...       │
//! │  └── Stop at the first problem with a typed ValidationError            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gharim_core::validation::{is_valid_email, is_valid_iraqi_mobile, validate_quantity};
//!
//! assert!(is_valid_iraqi_mobile("0770 123 4567"));
//! assert!(is_valid_email("a@b.co"));
//! assert!(validate_quantity(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::governorate::Governorate;
use crate::i18n::{self, MessageKey};
use crate::order::CheckoutForm;
use crate::types::{Language, Section};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name, per language.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum accepted image upload size (10 MiB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Image file extensions accepted by the admin upload.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

// =============================================================================
// Checkout Form
// =============================================================================

/// A checkout form field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    CustomerName,
    CustomerPhone,
    Governorate,
    Address,
    Email,
    Notes,
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<OrderField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    pub fn insert(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: OrderField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields and messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validates the checkout form.
///
/// ## Rules
/// | Field           | Rule                                                    |
/// |-----------------|---------------------------------------------------------|
/// | `customerName`  | required                                                |
/// | `customerPhone` | required, `07[3-9]` + 8 digits after removing spaces   |
/// | `governorate`   | required, one of the 18 governorates                    |
/// | `address`       | required                                                |
/// | `email`         | optional, `local@domain.tld` when present               |
/// | `notes`         | optional, free text                                     |
///
/// Every violated rule gets an entry; the function never stops early, so the
/// form can highlight all problems at once.
pub fn validate_order_form(form: &CheckoutForm, lang: Language) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let msg = |key| i18n::text(key, lang);

    if form.customer_name.trim().is_empty() {
        errors.insert(OrderField::CustomerName, msg(MessageKey::NameRequired));
    }

    if form.customer_phone.trim().is_empty() {
        errors.insert(OrderField::CustomerPhone, msg(MessageKey::PhoneRequired));
    } else if !is_valid_iraqi_mobile(&form.customer_phone) {
        errors.insert(OrderField::CustomerPhone, msg(MessageKey::PhoneInvalid));
    }

    if form.governorate.trim().is_empty() {
        errors.insert(OrderField::Governorate, msg(MessageKey::GovernorateRequired));
    } else if Governorate::parse(&form.governorate).is_none() {
        errors.insert(OrderField::Governorate, msg(MessageKey::GovernorateInvalid));
    }

    if form.address.trim().is_empty() {
        errors.insert(OrderField::Address, msg(MessageKey::AddressRequired));
    }

    if let Some(email) = form.email.as_deref() {
        if !email.trim().is_empty() && !is_valid_email(email) {
            errors.insert(OrderField::Email, msg(MessageKey::EmailInvalid));
        }
    }

    errors
}

/// Removes all whitespace from a phone number as typed.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Checks an Iraqi mobile number: `07`, one digit in `3..=9`, then exactly
/// eight more digits. Whitespace anywhere is ignored.
///
/// ## Example
/// ```rust
/// use gharim_core::validation::is_valid_iraqi_mobile;
///
/// assert!(is_valid_iraqi_mobile("07701234567"));
/// assert!(!is_valid_iraqi_mobile("0770123456"));
/// assert!(!is_valid_iraqi_mobile("08701234567"));
/// ```
pub fn is_valid_iraqi_mobile(raw: &str) -> bool {
    let phone = normalize_phone(raw);
    let bytes = phone.as_bytes();

    bytes.len() == 11
        && bytes.starts_with(b"07")
        && (b'3'..=b'9').contains(&bytes[2])
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Checks the `local@domain.tld` shape: a single `@`, a non-empty local
/// part, and a domain with a `.` that has text on both sides. No whitespace
/// is allowed anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
///
/// The cart applies the cap to the merged line quantity as well, so two
/// adds of 600 are rejected on the second one.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses and validates a price typed into the admin form.
///
/// ## Rules
/// - Required
/// - Whole dinars only
/// - Zero is allowed, negatives are not
///
/// ## Example
/// ```rust
/// use gharim_core::validation::validate_price;
///
/// assert_eq!(validate_price("15000").unwrap(), 15000);
/// assert!(validate_price("-5").is_err());
/// assert!(validate_price("12.5").is_err());
/// ```
pub fn validate_price(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be a whole number of dinars".to_string(),
    })?;

    if price < 0 {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "cannot be negative".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates one language's product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a section tag against the known sections.
pub fn validate_section(tag: &str) -> ValidationResult<Section> {
    if tag.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "section".to_string(),
        });
    }

    Section::from_tag(tag).ok_or_else(|| ValidationError::NotAllowed {
        field: "section".to_string(),
        allowed: Section::ALL.iter().map(|s| s.tag().to_string()).collect(),
    })
}

/// Validates an uploaded product image.
///
/// ## Rules
/// - A file must be present (non-empty name and content)
/// - Extension must be one of [`ALLOWED_IMAGE_EXTENSIONS`]
/// - At most [`MAX_IMAGE_BYTES`]
pub fn validate_image_upload(file_name: &str, size: usize) -> ValidationResult<()> {
    let file_name = file_name.trim();

    if file_name.is_empty() || size == 0 {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::NotAllowed {
            field: "image".to_string(),
            allowed: ALLOWED_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        });
    }

    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: format!("must be at most {} bytes", MAX_IMAGE_BYTES),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
