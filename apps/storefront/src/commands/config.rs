//! # Config Commands
//!
//! Read-only configuration and the session language toggle.

use serde::Serialize;
use tracing::debug;

use gharim_core::Language;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Gets the storefront configuration.
///
/// ## When Used
/// - App startup (store names, contact number, default language)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// The session language and the text direction it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub language: Language,
    /// `rtl` for Arabic, `ltr` otherwise.
    pub direction: &'static str,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        LanguageInfo {
            language,
            direction: match language {
                Language::Ar => "rtl",
                Language::En => "ltr",
            },
        }
    }
}

pub fn get_language(session: &SessionState) -> LanguageInfo {
    debug!("get_language command");
    session.language().into()
}

/// Flips between English and Arabic.
pub fn toggle_language(session: &SessionState) -> LanguageInfo {
    debug!("toggle_language command");
    session.toggle().into()
}

/// Sets the language from a code such as `ar` or `en-US`.
pub fn set_language(session: &SessionState, language: String) -> Result<LanguageInfo, ApiError> {
    debug!(language = %language, "set_language command");
    let language: Language = language.parse()?;
    session.set_language(language);
    Ok(language.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::config_state;
    use crate::error::ErrorCode;

    #[test]
    fn test_toggle_language_sets_direction() {
        let session = SessionState::default();
        assert_eq!(get_language(&session).direction, "ltr");

        let info = toggle_language(&session);
        assert_eq!(info.language, Language::Ar);
        assert_eq!(info.direction, "rtl");
    }

    #[test]
    fn test_set_language() {
        let session = SessionState::default();

        assert_eq!(
            set_language(&session, "AR".to_string()).unwrap().language,
            Language::Ar
        );

        let err = set_language(&session, "fr".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.language(), Language::Ar);
    }

    #[test]
    fn test_get_config_returns_copy() {
        let config = config_state();
        assert_eq!(get_config(&config).order_whatsapp, config.order_whatsapp);
    }
}
