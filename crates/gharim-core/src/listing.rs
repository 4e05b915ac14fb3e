//! # Product Listing (Admin)
//!
//! The admin upload form and its validation. Storage of the image and the
//! catalog insert happen in the layers above; this module only decides
//! whether a submission is acceptable and what product it describes.
//!
//! ```text
//! ProductListingForm + ImageUpload
//!        │
//!        ▼
//! validate_listing ──► Err(ValidationError) ──► listing_error_message(lang)
//!        │
//!        ▼
//! ProductListing ──► (image stored) ──► into_product(id, image_url, now)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::i18n::{self, MessageKey};
use crate::types::{Language, Product, Section};
use crate::validation::{
    validate_image_upload, validate_price, validate_product_name, validate_section,
    ValidationResult,
};

/// The admin form as submitted. Price is raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductListingForm {
    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub name_ar: String,

    #[serde(default)]
    pub description_en: String,

    #[serde(default)]
    pub description_ar: String,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub section: String,
}

/// An uploaded image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        ImageUpload {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// A validated listing, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub price: i64,
    pub section: Section,
}

impl ProductListing {
    /// Builds the catalog record once the image has a public URL.
    pub fn into_product(self, id: String, image_url: String, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name_en: self.name_en,
            name_ar: self.name_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            price: self.price,
            image_url,
            section: self.section.tag().to_string(),
            created_at,
        }
    }
}

/// Validates an admin submission.
///
/// Checks run in form order: image first (the form's first field), then
/// names, price and section. The first failure is returned.
pub fn validate_listing(
    form: &ProductListingForm,
    image: Option<&ImageUpload>,
) -> ValidationResult<ProductListing> {
    match image {
        Some(image) => validate_image_upload(&image.file_name, image.bytes.len())?,
        None => {
            return Err(ValidationError::Required {
                field: "image".to_string(),
            })
        }
    }

    validate_product_name("name_en", &form.name_en)?;
    validate_product_name("name_ar", &form.name_ar)?;
    let price = validate_price(&form.price)?;
    let section = validate_section(&form.section)?;

    Ok(ProductListing {
        name_en: form.name_en.trim().to_string(),
        name_ar: form.name_ar.trim().to_string(),
        description_en: optional_text(&form.description_en),
        description_ar: optional_text(&form.description_ar),
        price,
        section,
    })
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Admin-facing error line, e.g. `❌ Error: price is required`.
///
/// A missing image gets the dedicated "Please select an image" message.
pub fn listing_error_message(err: &ValidationError, lang: Language) -> String {
    let detail = match err {
        ValidationError::Required { field } if field == "image" => {
            i18n::text(MessageKey::ImageRequired, lang).to_string()
        }
        other => other.to_string(),
    };

    format!("❌ {}: {}", i18n::text(MessageKey::ErrorPrefix, lang), detail)
}

// =============================================================================
// Unit Tests
// =============================================================================
