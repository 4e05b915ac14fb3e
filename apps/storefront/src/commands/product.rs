//! # Product Commands
//!
//! Catalog reads for the product grid, the section menu and the product
//! detail page.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Browsing the Catalog                            │
//! │                                                                         │
//! │  Section menu ──► section_labels()        "All Products", "Coffee", ... │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product grid ──► list_products(section)  newest first                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Detail page ───► get_product(id)                                       │
//! │                   get_related_products(id)   same section, max 3        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every DTO is rendered for the session language: `name`, `description`
//! and `sectionLabel` are already localized, the raw bilingual fields ride
//! along for views that show both.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use gharim_core::i18n::{self, MessageKey};
use gharim_core::money::format_currency;
use gharim_core::types::section_label;
use gharim_core::{Language, Money, Product, Section, RELATED_PRODUCTS_LIMIT};

use crate::error::{ApiError, ErrorCode};
use crate::state::{DbState, SessionState};

/// Product DTO (Data Transfer Object) for the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub name_ar: String,
    pub description: String,
    pub price: Money,
    /// Price formatted for display, e.g. `٥٬٠٠٠ د.ع`.
    pub price_display: String,
    pub image_url: String,
    pub section: String,
    pub section_label: String,
    pub created_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn localized(product: Product, lang: Language) -> Self {
        ProductDto {
            name: product.name(lang).to_string(),
            description: product.description(lang).to_string(),
            price: product.unit_price(),
            price_display: format_currency(product.unit_price()),
            section_label: section_label(&product.section, lang),
            id: product.id,
            name_en: product.name_en,
            name_ar: product.name_ar,
            image_url: product.image_url,
            section: product.section,
            created_at: product.created_at,
        }
    }
}

/// One entry of the section menu. `section` is `None` for "All Products".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLabel {
    pub section: Option<Section>,
    pub label: String,
}

/// Lists products, newest first.
///
/// ## Arguments
/// * `section` - Section tag to filter by; `None` or blank lists everything
pub async fn list_products(
    db: &DbState,
    session: &SessionState,
    section: Option<String>,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let lang = session.language();
    debug!(section = ?section, "list_products command");

    let products = db.inner().products().list(section.as_deref()).await?;
    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| ProductDto::localized(p, lang))
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "list_products complete"
    );

    Ok(dtos)
}

/// Gets a single product for the detail page.
///
/// ## Errors
/// `NOT_FOUND` with the localized "Product not found" message.
pub async fn get_product(
    db: &DbState,
    session: &SessionState,
    id: String,
) -> Result<ProductDto, ApiError> {
    let lang = session.language();
    debug!(id = %id, "get_product command");

    let product = find_product(db, &id, lang).await?;
    Ok(ProductDto::localized(product, lang))
}

/// Products from the same section, for the "related products" strip.
pub async fn get_related_products(
    db: &DbState,
    session: &SessionState,
    id: String,
) -> Result<Vec<ProductDto>, ApiError> {
    let lang = session.language();
    debug!(id = %id, "get_related_products command");

    let product = find_product(db, &id, lang).await?;
    let related = db
        .inner()
        .products()
        .related(&product, RELATED_PRODUCTS_LIMIT)
        .await?;

    Ok(related
        .into_iter()
        .map(|p| ProductDto::localized(p, lang))
        .collect())
}

/// The section menu: "All Products" followed by every section.
pub fn section_labels(session: &SessionState) -> Vec<SectionLabel> {
    let lang = session.language();

    std::iter::once(SectionLabel {
        section: None,
        label: i18n::text(MessageKey::AllProducts, lang).to_string(),
    })
    .chain(Section::ALL.into_iter().map(|section| SectionLabel {
        section: Some(section),
        label: section.label(lang).to_string(),
    }))
    .collect()
}

/// Looks a product up, failing with a shopper-facing message.
pub(crate) async fn find_product(
    db: &DbState,
    id: &str,
    lang: Language,
) -> Result<Product, ApiError> {
    db.inner().products().get_by_id(id).await?.ok_or_else(|| {
        ApiError::new(
            ErrorCode::NotFound,
            i18n::text(MessageKey::ProductNotFound, lang),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{db_state, insert_product};

    #[tokio::test]
    async fn test_list_products_filters_by_section() {
        let (db, _dir) = db_state().await;
        insert_product(&db, "c1", "coffee", 12_000, 0).await;
        insert_product(&db, "s1", "sweets", 5_000, 1).await;
        insert_product(&db, "s2", "sweets", 15_000, 2).await;
        let session = SessionState::default();

        let all = list_products(&db, &session, None).await.unwrap();
        assert_eq!(all.len(), 3);
        // Newest first
        assert_eq!(all[0].id, "s2");

        let sweets = list_products(&db, &session, Some("sweets".to_string()))
            .await
            .unwrap();
        let ids: Vec<&str> = sweets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s1"]);
    }

    #[tokio::test]
    async fn test_dto_follows_session_language() {
        let (db, _dir) = db_state().await;
        insert_product(&db, "s1", "sweets", 5_000, 0).await;
        let session = SessionState::new(Language::Ar);

        let dto = get_product(&db, &session, "s1".to_string()).await.unwrap();

        assert_eq!(dto.name, "منتج s1");
        assert_eq!(dto.section_label, "حلويات");
        assert_eq!(dto.price, Money::from_dinars(5_000));
        assert_eq!(dto.price_display, format_currency(Money::from_dinars(5_000)));
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let (db, _dir) = db_state().await;
        let session = SessionState::default();

        let err = get_product(&db, &session, "missing".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found");
    }

    #[tokio::test]
    async fn test_related_products_exclude_self() {
        let (db, _dir) = db_state().await;
        for (i, id) in ["s1", "s2", "s3", "s4", "s5"].iter().enumerate() {
            insert_product(&db, id, "sweets", 5_000, i as i64).await;
        }
        insert_product(&db, "c1", "coffee", 12_000, 10).await;
        let session = SessionState::default();

        let related = get_related_products(&db, &session, "s1".to_string())
            .await
            .unwrap();

        assert_eq!(related.len(), RELATED_PRODUCTS_LIMIT as usize);
        assert!(related.iter().all(|p| p.id != "s1" && p.section == "sweets"));
    }

    #[test]
    fn test_section_labels() {
        let labels = section_labels(&SessionState::new(Language::En));

        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0].section, None);
        assert_eq!(labels[0].label, "All Products");
        assert_eq!(labels[1].section, Some(Section::Coffee));
        assert_eq!(labels[5].label, "Islamic Books");
    }
}
