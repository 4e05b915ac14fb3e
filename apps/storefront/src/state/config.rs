//! # Configuration State
//!
//! Storefront configuration, loaded once at startup from `GHARIM_*`
//! environment variables.
//!
//! ## Variables
//! ```text
//! GHARIM_ORDER_WHATSAPP    operator number orders are sent to   (required)
//! GHARIM_DB_PATH           SQLite catalog path                  (<data dir>/gharim.db)
//! GHARIM_MEDIA_DIR         product image root                   (<data dir>/media)
//! GHARIM_PUBLIC_BASE_URL   base of public image URLs            (http://localhost:8080)
//! GHARIM_DEFAULT_LANG      en | ar                              (en)
//! GHARIM_STORE_NAME_EN     store name in English order messages (Gharim Store)
//! GHARIM_STORE_NAME_AR     store name in Arabic order messages  (غريم ستور)
//! GHARIM_CONTACT_PHONE     public contact number                (none)
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;

use gharim_core::deep_link::clean_destination;
use gharim_core::order::OrderMessageEncoder;
use gharim_core::types::pick_localized;
use gharim_core::{Language, DEFAULT_STORE_NAME_AR, DEFAULT_STORE_NAME_EN};

/// Default base for public image URLs during development.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";

/// Storefront configuration.
///
/// Paths are not serialized: `get_config` hands this struct to the
/// frontend and file locations are none of its business.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Operator WhatsApp number, digits only.
    pub order_whatsapp: String,

    #[serde(skip)]
    pub db_path: PathBuf,

    #[serde(skip)]
    pub media_dir: PathBuf,

    /// Base of public image URLs, without a trailing slash.
    pub public_base_url: String,

    /// Language a new session starts in.
    pub default_language: Language,

    pub store_name_en: String,

    pub store_name_ar: String,

    /// Public contact number shown in the footer, if any.
    pub contact_phone: Option<String>,
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = default_data_dir();
        Self::from_lookup(|key| env::var(key).ok(), data_dir.as_deref())
    }

    /// Loads configuration through `lookup`.
    ///
    /// `data_dir` is where the catalog and media live when
    /// `GHARIM_DB_PATH` / `GHARIM_MEDIA_DIR` are unset.
    pub fn from_lookup<F>(lookup: F, data_dir: Option<&Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let order_whatsapp = var("GHARIM_ORDER_WHATSAPP")
            .ok_or_else(|| ConfigError::MissingRequired("GHARIM_ORDER_WHATSAPP".to_string()))?;
        let order_whatsapp = clean_destination(&order_whatsapp);
        if order_whatsapp.is_empty() {
            return Err(ConfigError::InvalidValue(
                "GHARIM_ORDER_WHATSAPP".to_string(),
            ));
        }

        let db_path = match var("GHARIM_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => data_dir
                .map(|dir| dir.join("gharim.db"))
                .ok_or_else(|| ConfigError::MissingRequired("GHARIM_DB_PATH".to_string()))?,
        };

        let media_dir = match var("GHARIM_MEDIA_DIR") {
            Some(path) => PathBuf::from(path),
            None => data_dir
                .map(|dir| dir.join("media"))
                .ok_or_else(|| ConfigError::MissingRequired("GHARIM_MEDIA_DIR".to_string()))?,
        };

        let public_base_url = var("GHARIM_PUBLIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(public_base_url.starts_with("http://") || public_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "GHARIM_PUBLIC_BASE_URL".to_string(),
            ));
        }

        let default_language = match var("GHARIM_DEFAULT_LANG") {
            Some(code) => Language::parse(&code)
                .ok_or_else(|| ConfigError::InvalidValue("GHARIM_DEFAULT_LANG".to_string()))?,
            None => Language::default(),
        };

        Ok(ConfigState {
            order_whatsapp,
            db_path,
            media_dir,
            public_base_url,
            default_language,
            store_name_en: var("GHARIM_STORE_NAME_EN")
                .unwrap_or_else(|| DEFAULT_STORE_NAME_EN.to_string()),
            store_name_ar: var("GHARIM_STORE_NAME_AR")
                .unwrap_or_else(|| DEFAULT_STORE_NAME_AR.to_string()),
            contact_phone: var("GHARIM_CONTACT_PHONE"),
        })
    }

    /// Order message encoder carrying the configured store names.
    pub fn encoder(&self) -> OrderMessageEncoder {
        OrderMessageEncoder::new(&self.store_name_en, &self.store_name_ar)
    }

    /// Store name in `lang`, falling back to the other language.
    pub fn store_name(&self, lang: Language) -> &str {
        pick_localized(&self.store_name_en, &self.store_name_ar, lang)
    }
}

/// Platform data directory for the catalog and media files.
///
/// - **macOS**: `~/Library/Application Support/com.gharim.store`
/// - **Windows**: `%APPDATA%\gharim\store\data`
/// - **Linux**: `~/.local/share/store`
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "gharim", "store").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned(), Some(Path::new("/data/gharim")))
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("GHARIM_ORDER_WHATSAPP", "+964 770 123 4567")]).unwrap();

        assert_eq!(config.order_whatsapp, "9647701234567");
        assert_eq!(config.db_path, PathBuf::from("/data/gharim/gharim.db"));
        assert_eq!(config.media_dir, PathBuf::from("/data/gharim/media"));
        assert_eq!(config.public_base_url, DEFAULT_PUBLIC_BASE_URL);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.store_name_en, DEFAULT_STORE_NAME_EN);
        assert_eq!(config.store_name_ar, DEFAULT_STORE_NAME_AR);
        assert_eq!(config.contact_phone, None);
    }

    #[test]
    fn test_destination_is_required() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::MissingRequired(key)) if key == "GHARIM_ORDER_WHATSAPP"
        ));
        assert!(matches!(
            load(&[("GHARIM_ORDER_WHATSAPP", "   ")]),
            Err(ConfigError::MissingRequired(_))
        ));
        assert!(matches!(
            load(&[("GHARIM_ORDER_WHATSAPP", "call me")]),
            Err(ConfigError::InvalidValue(key)) if key == "GHARIM_ORDER_WHATSAPP"
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GHARIM_ORDER_WHATSAPP", "9647801112222"),
            ("GHARIM_DB_PATH", "/tmp/shop.db"),
            ("GHARIM_MEDIA_DIR", "/srv/media"),
            ("GHARIM_PUBLIC_BASE_URL", "https://cdn.gharim.example/"),
            ("GHARIM_DEFAULT_LANG", "ar-IQ"),
            ("GHARIM_STORE_NAME_EN", "Gharim Basra"),
            ("GHARIM_CONTACT_PHONE", "07801112222"),
        ])
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.media_dir, PathBuf::from("/srv/media"));
        assert_eq!(config.public_base_url, "https://cdn.gharim.example");
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.store_name(Language::En), "Gharim Basra");
        assert_eq!(config.store_name(Language::Ar), DEFAULT_STORE_NAME_AR);
        assert_eq!(config.contact_phone.as_deref(), Some("07801112222"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[
                ("GHARIM_ORDER_WHATSAPP", "9647801112222"),
                ("GHARIM_DEFAULT_LANG", "fr"),
            ]),
            Err(ConfigError::InvalidValue(key)) if key == "GHARIM_DEFAULT_LANG"
        ));
        assert!(matches!(
            load(&[
                ("GHARIM_ORDER_WHATSAPP", "9647801112222"),
                ("GHARIM_PUBLIC_BASE_URL", "cdn.example"),
            ]),
            Err(ConfigError::InvalidValue(key)) if key == "GHARIM_PUBLIC_BASE_URL"
        ));
    }

    #[test]
    fn test_missing_data_dir_needs_explicit_paths() {
        let result = ConfigState::from_lookup(
            |key| (key == "GHARIM_ORDER_WHATSAPP").then(|| "9647801112222".to_string()),
            None,
        );
        assert!(matches!(result, Err(ConfigError::MissingRequired(key)) if key == "GHARIM_DB_PATH"));
    }

    #[test]
    fn test_serialized_config_hides_paths() {
        let config = load(&[("GHARIM_ORDER_WHATSAPP", "9647801112222")]).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["orderWhatsapp"], "9647801112222");
        assert_eq!(json["defaultLanguage"], "en");
        assert!(json.get("dbPath").is_none());
        assert!(json.get("mediaDir").is_none());
    }
}
