//! # Media Store
//!
//! Product images uploaded from the admin form.
//!
//! ## Layout
//! ```text
//! {media_root}/
//!   images/
//!     1735689600000-cardamom-coffee.png
//!     1735689612345-dates.jpg
//!
//! public URL: {public_base_url}/storage/v1/object/public/products/images/1735689600000-dates.jpg
//! ```
//!
//! Object keys are `images/{unix_millis}-{sanitized file name}`; the
//! millisecond prefix keeps two uploads of `photo.jpg` apart. Files are
//! written to a temp name and renamed into place so a reader never sees a
//! half-written image.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::DbResult;

/// Prefix every object key is stored under.
pub const IMAGE_PREFIX: &str = "images";

/// Path between the public base URL and the object key.
pub const PUBLIC_OBJECT_PATH: &str = "storage/v1/object/public/products";

/// An image that was written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    /// Object key relative to the media root, e.g. `images/1735...-dates.jpg`.
    pub path: String,

    /// Public URL saved on the product record.
    pub public_url: String,

    pub size: u64,
}

/// Filesystem-backed store for product images.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl MediaStore {
    /// Creates a media store, creating the root directory if needed.
    pub async fn new(root: impl AsRef<Path>, public_base_url: impl Into<String>) -> DbResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join(IMAGE_PREFIX)).await?;

        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        info!(root = %root.display(), base_url = %public_base_url, "Media store ready");

        Ok(MediaStore {
            root,
            public_base_url,
        })
    }

    /// Stores an uploaded image and returns its key and public URL.
    pub async fn store_image(&self, file_name: &str, bytes: &[u8]) -> DbResult<StoredImage> {
        let key = format!(
            "{}/{}-{}",
            IMAGE_PREFIX,
            chrono::Utc::now().timestamp_millis(),
            sanitize_file_name(file_name)
        );
        let path = self.root.join(&key);

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &path).await?;

        debug!(key = %key, size = bytes.len(), "Stored image");

        Ok(StoredImage {
            public_url: self.public_url(&key),
            path: key,
            size: bytes.len() as u64,
        })
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, PUBLIC_OBJECT_PATH, key)
    }

    /// Reads a stored image back by key.
    pub async fn read(&self, key: &str) -> DbResult<Vec<u8>> {
        Ok(fs::read(self.root.join(key)).await?)
    }
}

/// Reduces an uploaded file name to a safe object-key component.
///
/// Directory parts are dropped; anything outside `[A-Za-z0-9._-]` becomes
/// `-`. An empty result falls back to `image`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("dates.jpg"), "dates.jpg");
        assert_eq!(sanitize_file_name("my photo (1).png"), "my-photo--1-.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\a\\tea.webp"), "tea.webp");
        assert_eq!(sanitize_file_name("قهوة.png"), "----.png");
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name("..."), "image");
    }

    #[tokio::test]
    async fn test_store_image_writes_file_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path(), "https://cdn.example/")
            .await
            .unwrap();

        let stored = store.store_image("dates.jpg", b"jpeg-bytes").await.unwrap();

        assert!(stored.path.starts_with("images/"));
        assert!(stored.path.ends_with("-dates.jpg"));
        assert_eq!(stored.size, 10);
        assert_eq!(
            stored.public_url,
            format!(
                "https://cdn.example/storage/v1/object/public/products/{}",
                stored.path
            )
        );
        assert_eq!(store.read(&stored.path).await.unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_missing_image_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path(), "http://localhost:8080")
            .await
            .unwrap();

        assert!(matches!(
            store.read("images/nope.png").await,
            Err(crate::DbError::Storage(_))
        ));
    }
}
