//! # Domain Types
//!
//! Core domain types used throughout Gharim Store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Language     │   │    Section      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  En (default)   │   │  coffee         │       │
//! │  │  name_en        │   │  Ar             │   │  sweets         │       │
//! │  │  name_ar        │   └─────────────────┘   │  gifts          │       │
//! │  │  price (IQD)    │                         │  traditional    │       │
//! │  │  image_url      │                         │  books          │       │
//! │  │  section (tag)  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bilingual Text
//! Every shopper-visible product text exists in English and Arabic. When the
//! requested language is blank the other language is shown instead, see
//! [`pick_localized`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::i18n::{self, MessageKey};
use crate::money::Money;

// =============================================================================
// Language
// =============================================================================

/// Shopper-selected interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Language {
    /// Both supported languages, English first.
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Returns the language code (`en` / `ar`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Returns the other supported language.
    ///
    /// Used both by the language toggle and by the name fallback.
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Parses a language code, tolerant of case and region tags (`ar-IQ`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| ValidationError::NotAllowed {
            field: "language".to_string(),
            allowed: Language::ALL.iter().map(|l| l.as_str().to_string()).collect(),
        })
    }
}

/// Picks the text for `lang`, falling back to the other language when the
/// requested one is blank.
///
/// ## Example
/// ```rust
/// use gharim_core::{pick_localized, Language};
///
/// assert_eq!(pick_localized("Dates", "تمر", Language::Ar), "تمر");
/// assert_eq!(pick_localized("Dates", "  ", Language::Ar), "Dates");
/// assert_eq!(pick_localized("", "تمر", Language::En), "تمر");
/// ```
pub fn pick_localized<'a>(en: &'a str, ar: &'a str, lang: Language) -> &'a str {
    let (preferred, fallback) = match lang {
        Language::En => (en, ar),
        Language::Ar => (ar, en),
    };

    if preferred.trim().is_empty() {
        fallback
    } else {
        preferred
    }
}

// =============================================================================
// Section
// =============================================================================

/// Product category ("section") offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Coffee,
    Sweets,
    Gifts,
    Traditional,
    Books,
}

impl Section {
    /// All sections in menu order.
    pub const ALL: [Section; 5] = [
        Section::Coffee,
        Section::Sweets,
        Section::Gifts,
        Section::Traditional,
        Section::Books,
    ];

    /// The tag stored on product records.
    pub const fn tag(self) -> &'static str {
        match self {
            Section::Coffee => "coffee",
            Section::Sweets => "sweets",
            Section::Gifts => "gifts",
            Section::Traditional => "traditional",
            Section::Books => "books",
        }
    }

    /// Looks up a section by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Section::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Display label in the given language.
    pub fn label(self, lang: Language) -> &'static str {
        let key = match self {
            Section::Coffee => MessageKey::SectionCoffee,
            Section::Sweets => MessageKey::SectionSweets,
            Section::Gifts => MessageKey::SectionGifts,
            Section::Traditional => MessageKey::SectionTraditional,
            Section::Books => MessageKey::SectionBooks,
        };
        i18n::text(key, lang)
    }
}

/// Display label for a raw section tag; unknown tags are shown as-is.
pub fn section_label(tag: &str, lang: Language) -> String {
    Section::from_tag(tag)
        .map(|s| s.label(lang).to_string())
        .unwrap_or_else(|| tag.to_string())
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Read-only from the cart's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Opaque identity (UUID v4 for products created by the admin upload).
    pub id: String,

    pub name_en: String,

    pub name_ar: String,

    pub description_en: Option<String>,

    pub description_ar: Option<String>,

    /// Unit price in whole dinars.
    pub price: i64,

    /// Public URL of the product image.
    pub image_url: String,

    /// Section tag (see [`Section`]).
    pub section: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_dinars(self.price)
    }

    /// Display name with cross-language fallback.
    pub fn name(&self, lang: Language) -> &str {
        pick_localized(&self.name_en, &self.name_ar, lang)
    }

    /// Description with cross-language fallback; empty when neither exists.
    pub fn description(&self, lang: Language) -> &str {
        pick_localized(
            self.description_en.as_deref().unwrap_or(""),
            self.description_ar.as_deref().unwrap_or(""),
            lang,
        )
    }

    /// The known section this product belongs to, if any.
    pub fn known_section(&self) -> Option<Section> {
        Section::from_tag(&self.section)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dates() -> Product {
        Product {
            id: "p1".to_string(),
            name_en: "Dates".to_string(),
            name_ar: "تمر".to_string(),
            description_en: Some("Basra dates".to_string()),
            description_ar: None,
            price: 5000,
            image_url: "https://img.example/dates.jpg".to_string(),
            section: "sweets".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_language_parse_and_toggle() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse(" AR "), Some(Language::Ar));
        assert_eq!(Language::parse("ar-IQ"), Some(Language::Ar));
        assert_eq!(Language::parse("fr"), None);
        assert!("xx".parse::<Language>().is_err());

        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled().toggled(), Language::Ar);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_section_tags_and_labels() {
        assert_eq!(Section::from_tag("coffee"), Some(Section::Coffee));
        assert_eq!(Section::from_tag("shoes"), None);
        assert_eq!(Section::Books.label(Language::En), "Islamic Books");
        assert_eq!(Section::Books.label(Language::Ar), "كتب إسلامية");
        assert_eq!(section_label("gifts", Language::Ar), "هدايا");
        assert_eq!(section_label("shoes", Language::En), "shoes");
    }

    #[test]
    fn test_product_localized_fields() {
        let product = dates();
        assert_eq!(product.name(Language::Ar), "تمر");
        assert_eq!(product.description(Language::Ar), "Basra dates");
        assert_eq!(product.unit_price(), Money::from_dinars(5000));
        assert_eq!(product.known_section(), Some(Section::Sweets));
    }
}
