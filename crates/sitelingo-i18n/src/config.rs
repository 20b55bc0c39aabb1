//! Resolution settings snapshot

use sitelingo_config::{
    ConfigProvider, SiteSettings, DEFAULT_CONTENT_LANGUAGE_KEY,
    ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY, FALLBACK_CONTENT_LANGUAGE,
    LOG_I18N_WARNINGS_KEY,
};

/// Settings a [`Translator`](crate::Translator) resolves with.
///
/// Read once at construction and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    default_language: String,
    emit_placeholder_on_miss: bool,
    log_warnings: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(FALLBACK_CONTENT_LANGUAGE)
    }
}

impl ResolverConfig {
    /// Settings with the given default language and all switches off
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            emit_placeholder_on_miss: false,
            log_warnings: false,
        }
    }

    /// Read `defaultContentLanguage`, `enableMissingTranslationPlaceholders`
    /// and `logI18nWarnings`; absent or blank values take their defaults.
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        let default_language = provider
            .get_string(DEFAULT_CONTENT_LANGUAGE_KEY)
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| FALLBACK_CONTENT_LANGUAGE.to_string());

        Self {
            default_language,
            emit_placeholder_on_miss: provider
                .get_bool(ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY)
                .unwrap_or(false),
            log_warnings: provider.get_bool(LOG_I18N_WARNINGS_KEY).unwrap_or(false),
        }
    }

    /// Return `[i18n] <id>` instead of an empty string on a miss
    #[must_use]
    pub const fn with_placeholders(mut self, enabled: bool) -> Self {
        self.emit_placeholder_on_miss = enabled;
        self
    }

    /// Report misses as warnings
    #[must_use]
    pub const fn with_warnings(mut self, enabled: bool) -> Self {
        self.log_warnings = enabled;
        self
    }

    /// Language consulted when the requested one lacks a message
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Whether misses render as a visible placeholder
    pub const fn emit_placeholder_on_miss(&self) -> bool {
        self.emit_placeholder_on_miss
    }

    /// Whether misses are logged at warn level
    pub const fn log_warnings(&self) -> bool {
        self.log_warnings
    }
}

impl From<&SiteSettings> for ResolverConfig {
    fn from(settings: &SiteSettings) -> Self {
        Self::from_provider(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_for_empty_provider() {
        let provider: HashMap<String, String> = HashMap::new();
        let config = ResolverConfig::from_provider(&provider);

        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.default_language(), "en");
        assert!(!config.emit_placeholder_on_miss());
        assert!(!config.log_warnings());
    }

    #[test]
    fn test_reads_all_keys() {
        let provider = HashMap::from([
            (DEFAULT_CONTENT_LANGUAGE_KEY.to_string(), "es".to_string()),
            (
                ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY.to_string(),
                "true".to_string(),
            ),
            (LOG_I18N_WARNINGS_KEY.to_string(), "1".to_string()),
        ]);
        let config = ResolverConfig::from_provider(&provider);

        assert_eq!(config.default_language(), "es");
        assert!(config.emit_placeholder_on_miss());
        assert!(config.log_warnings());
    }

    #[test]
    fn test_blank_language_falls_back() {
        let blank = (DEFAULT_CONTENT_LANGUAGE_KEY.to_string(), "  ".to_string());
        let provider = HashMap::from([blank]);
        assert_eq!(ResolverConfig::from_provider(&provider).default_language(), "en");
    }

    #[test]
    fn test_from_site_settings() {
        let settings = SiteSettings {
            default_content_language: "fr".to_string(),
            enable_missing_translation_placeholders: true,
            log_i18n_warnings: false,
        };
        let config = ResolverConfig::from(&settings);

        assert_eq!(config, ResolverConfig::new("fr").with_placeholders(true));
    }
}
