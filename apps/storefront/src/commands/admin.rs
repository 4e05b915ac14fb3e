//! # Admin Commands
//!
//! Product upload from the admin form.
//!
//! ```text
//! ProductListingForm + image
//!        │
//!        ▼
//! validate_listing ──✗──► "❌ Error: ..." (nothing stored)
//!        │
//!        ▼
//! MediaStore::store_image ──► images/{millis}-{name}  ──► public URL
//!        │
//!        ▼
//! products().insert(...)  ──► "✅ Product uploaded successfully!"
//! ```
//!
//! An image whose product insert fails stays in the media store; it is
//! unreferenced but harmless.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gharim_core::i18n::{self, MessageKey};
use gharim_core::listing::{validate_listing, ImageUpload, ProductListingForm};
use gharim_db::generate_product_id;

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{DbState, SessionState};

/// Image file as sent by the admin form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl From<ImageFile> for ImageUpload {
    fn from(file: ImageFile) -> Self {
        ImageUpload::new(file.file_name, file.bytes)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUploaded {
    pub product: ProductDto,
    /// "✅ Product uploaded successfully!"
    pub message: String,
}

/// Validates a listing, stores its image and adds the product to the
/// catalog.
///
/// ## Errors
/// - `VALIDATION_ERROR` with an admin-facing message for the first bad field
/// - `STORAGE_ERROR` when the image could not be written
/// - `DATABASE_ERROR` when the insert failed
pub async fn upload_product(
    db: &DbState,
    session: &SessionState,
    form: ProductListingForm,
    image: Option<ImageFile>,
) -> Result<ProductUploaded, ApiError> {
    let lang = session.language();
    let image = image.map(ImageUpload::from);
    debug!(
        name_en = %form.name_en,
        section = %form.section,
        image_bytes = image.as_ref().map(|i| i.bytes.len()),
        "upload_product command"
    );

    let listing =
        validate_listing(&form, image.as_ref()).map_err(|err| ApiError::listing(&err, lang))?;
    // validate_listing rejects a missing image
    let image = image.ok_or_else(|| ApiError::internal("image missing after validation"))?;

    let stored = db
        .media()
        .store_image(&image.file_name, &image.bytes)
        .await?;

    let product = listing.into_product(generate_product_id(), stored.public_url, chrono::Utc::now());
    let product = db.inner().products().insert(&product).await?;

    info!(id = %product.id, section = %product.section, "Product uploaded");

    Ok(ProductUploaded {
        product: ProductDto::localized(product, lang),
        message: i18n::text(MessageKey::ProductUploaded, lang).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::list_products;
    use crate::commands::test_support::db_state;
    use crate::error::ErrorCode;
    use gharim_core::Language;

    fn form() -> ProductListingForm {
        ProductListingForm {
            name_en: "Basra Dates".to_string(),
            name_ar: "تمر البصرة".to_string(),
            description_en: "Barhi dates".to_string(),
            description_ar: String::new(),
            price: "5000".to_string(),
            section: "sweets".to_string(),
        }
    }

    fn image() -> ImageFile {
        ImageFile {
            file_name: "dates.jpg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    #[tokio::test]
    async fn test_upload_stores_image_and_product() {
        let (db, _dir) = db_state().await;
        let session = SessionState::default();

        let uploaded = upload_product(&db, &session, form(), Some(image()))
            .await
            .unwrap();

        assert_eq!(uploaded.message, "✅ Product uploaded successfully!");
        assert_eq!(uploaded.product.name, "Basra Dates");
        assert_eq!(uploaded.product.price.dinars(), 5000);
        assert!(uploaded.product.image_url.ends_with("-dates.jpg"));

        let key = uploaded
            .product
            .image_url
            .split("/products/")
            .nth(1)
            .unwrap()
            .to_string();
        assert_eq!(db.media().read(&key).await.unwrap(), image().bytes);

        let listed = list_products(&db, &session, Some("sweets".to_string()))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, uploaded.product.id);
    }

    #[tokio::test]
    async fn test_missing_image_is_rejected() {
        let (db, _dir) = db_state().await;
        let session = SessionState::new(Language::Ar);

        let err = upload_product(&db, &session, form(), None)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "❌ خطأ: يرجى اختيار صورة");
        assert_eq!(db.inner().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_bad_price_stores_nothing() {
        let (db, _dir) = db_state().await;
        let bad = ProductListingForm {
            price: "five thousand".to_string(),
            ..form()
        };

        let err = upload_product(&db, &SessionState::default(), bad, Some(image()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("❌ Error: "));
        assert_eq!(db.inner().products().count().await.unwrap(), 0);
    }
}
