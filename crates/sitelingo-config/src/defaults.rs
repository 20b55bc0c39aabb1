//! Type-safe default values using const functions.

use crate::schema::SiteSettings;

/// Language used when no `defaultContentLanguage` is configured.
pub const FALLBACK_CONTENT_LANGUAGE: &str = "en";

/// Placeholders are off unless explicitly enabled.
pub const fn default_enable_missing_translation_placeholders() -> bool {
    false
}

/// Miss warnings are off unless explicitly enabled.
pub const fn default_log_i18n_warnings() -> bool {
    false
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_content_language: FALLBACK_CONTENT_LANGUAGE.to_string(),
            enable_missing_translation_placeholders:
                default_enable_missing_translation_placeholders(),
            log_i18n_warnings: default_log_i18n_warnings(),
        }
    }
}
