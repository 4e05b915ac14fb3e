//! # Session State
//!
//! The shopper's interface language. Every view and every generated
//! message reads it; the header toggle flips it.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use gharim_core::Language;

#[derive(Debug, Default)]
pub struct SessionState {
    language: Mutex<Language>,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        SessionState {
            language: Mutex::new(language),
        }
    }

    /// The current language.
    pub fn language(&self) -> Language {
        *self.language.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_language(&self, language: Language) {
        *self.language.lock().unwrap_or_else(PoisonError::into_inner) = language;
        info!(language = %language, "Language changed");
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&self) -> Language {
        let mut current = self.language.lock().unwrap_or_else(PoisonError::into_inner);
        *current = current.toggled();
        info!(language = %*current, "Language toggled");
        *current
    }
}
