//! Opaque key/value access to settings.

use crate::loader::parse_bool;
use crate::schema::{
    SiteSettings, DEFAULT_CONTENT_LANGUAGE_KEY, ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY,
    LOG_I18N_WARNINGS_KEY,
};
use std::collections::{BTreeMap, HashMap};

/// Read-only key/value view over configuration.
///
/// Consumers read the options they need by name and apply their own
/// defaults to absent keys.
pub trait ConfigProvider {
    /// String value of `key`, if set.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Boolean value of `key`, if set and interpretable as a boolean.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_string(key).as_deref().and_then(parse_bool)
    }
}

impl ConfigProvider for SiteSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        match key {
            DEFAULT_CONTENT_LANGUAGE_KEY => Some(self.default_content_language.clone()),
            ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY => {
                Some(self.enable_missing_translation_placeholders.to_string())
            }
            LOG_I18N_WARNINGS_KEY => Some(self.log_i18n_warnings.to_string()),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match key {
            ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY => {
                Some(self.enable_missing_translation_placeholders)
            }
            LOG_I18N_WARNINGS_KEY => Some(self.log_i18n_warnings),
            _ => None,
        }
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigProvider for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_expose_known_keys() {
        let settings = SiteSettings {
            default_content_language: "es".to_string(),
            enable_missing_translation_placeholders: true,
            log_i18n_warnings: false,
        };

        assert_eq!(
            settings.get_string(DEFAULT_CONTENT_LANGUAGE_KEY).as_deref(),
            Some("es")
        );
        assert_eq!(
            settings.get_bool(ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY),
            Some(true)
        );
        assert_eq!(settings.get_bool(LOG_I18N_WARNINGS_KEY), Some(false));
        assert_eq!(settings.get_string("title"), None);
    }

    #[test]
    fn test_map_provider_parses_bools() {
        let map = HashMap::from([
            (
                ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY.to_string(),
                "true".to_string(),
            ),
            (LOG_I18N_WARNINGS_KEY.to_string(), "nope".to_string()),
        ]);

        assert_eq!(map.get_bool(ENABLE_MISSING_TRANSLATION_PLACEHOLDERS_KEY), Some(true));
        assert_eq!(map.get_bool(LOG_I18N_WARNINGS_KEY), None);
        assert_eq!(map.get_string(DEFAULT_CONTENT_LANGUAGE_KEY), None);
    }
}
