//! Runtime validation of site settings.

use crate::loader::ConfigError;
use crate::schema::{SiteSettings, DEFAULT_CONTENT_LANGUAGE_KEY};

/// Settings validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates site settings.
    pub fn validate(settings: &SiteSettings) -> Result<(), ConfigError> {
        Self::validate_language_code(&settings.default_content_language)
    }

    /// Language codes are opaque, case-sensitive tokens; they only have to
    /// be usable as a table key and as a fragment name prefix.
    pub fn validate_language_code(code: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::Validation {
            field: DEFAULT_CONTENT_LANGUAGE_KEY.to_string(),
            message: message.to_string(),
        };

        if code.is_empty() {
            return Err(invalid("language code must not be blank"));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(invalid("language code must not contain whitespace"));
        }
        if code.contains(['.', '/', '\\']) {
            return Err(invalid("language code must not contain '.', '/' or '\\'"));
        }
        Ok(())
    }
}
