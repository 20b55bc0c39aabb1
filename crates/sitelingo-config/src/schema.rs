//! Settings schema definitions using serde.

use serde::{Deserialize, Serialize};

/// Key of the fallback language setting.
pub const DEFAULT_CONTENT_LANGUAGE_KEY: &str = "defaultContentLanguage";
/// Key of the missing-translation placeholder switch.
pub const ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY: &str =
    "enableMissingTranslationPlaceholders";
/// Key of the missing-translation warning switch.
pub const LOG_I18N_WARNINGS_KEY: &str = "logI18nWarnings";

/// Site settings relevant to translation lookup.
///
/// Site configuration documents carry many more keys; anything not listed
/// here is ignored while deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Language consulted when the requested one lacks a translation.
    pub default_content_language: String,
    /// Render `[i18n] <id>` instead of an empty string on a miss.
    pub enable_missing_translation_placeholders: bool,
    /// Report every miss as a warning in addition to the debug record.
    pub log_i18n_warnings: bool,
}
