//! Settings parsing with environment variable overrides.
//!
//! The host toolchain owns reading configuration files; this module only
//! turns their text into [`SiteSettings`].

use crate::schema::SiteSettings;
use crate::validator::ConfigValidator;
use sitelingo_common::SitelingoError;
use std::env;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding `defaultContentLanguage`.
pub const ENV_DEFAULT_CONTENT_LANGUAGE: &str = "SITELINGO_DEFAULT_CONTENT_LANGUAGE";
/// Environment variable overriding `enableMissingTranslationPlaceholders`.
pub const ENV_ENABLE_MISSING_TRANSLATION_PLACEHOLDERS: &str =
    "SITELINGO_ENABLE_MISSING_TRANSLATION_PLACEHOLDERS";
/// Environment variable overriding `logI18nWarnings`.
pub const ENV_LOG_I18N_WARNINGS: &str = "SITELINGO_LOG_I18N_WARNINGS";

/// Settings loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("Failed to parse YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': expected a boolean, got '{value}'")]
    EnvParse {
        /// Variable name
        var: String,
        /// Rejected value
        value: String,
    },

    /// Settings validation error
    #[error("Invalid setting '{field}': {message}")]
    Validation {
        /// Setting key
        field: String,
        /// Why the value was rejected
        message: String,
    },
}

impl From<ConfigError> for SitelingoError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, message } => {
                Self::validation_field(message, field)
            }
            other => Self::config_with_source("Settings loading error", other),
        }
    }
}

/// Syntax of a settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// YAML document
    Yaml,
    /// TOML document
    Toml,
}

/// Settings loader
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Parse a settings document without overrides or validation.
    ///
    /// A blank document yields the defaults.
    pub fn parse(content: &str, format: SettingsFormat) -> Result<SiteSettings, ConfigError> {
        if content.trim().is_empty() {
            return Ok(SiteSettings::default());
        }

        let settings = match format {
            SettingsFormat::Yaml => serde_yaml::from_str(content)?,
            SettingsFormat::Toml => toml::from_str(content)?,
        };
        Ok(settings)
    }

    /// Parse, apply process environment overrides and validate.
    pub fn load(content: &str, format: SettingsFormat) -> Result<SiteSettings, ConfigError> {
        Self::load_with_env(content, format, |var| env::var(var).ok())
    }

    /// Like [`SettingsLoader::load`] with an explicit variable lookup.
    pub fn load_with_env<F>(
        content: &str,
        format: SettingsFormat,
        lookup: F,
    ) -> Result<SiteSettings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::parse(content, format)?;
        Self::apply_env_overrides(&mut settings, lookup)?;
        ConfigValidator::validate(&settings)?;

        debug!(
            default_content_language = %settings.default_content_language,
            placeholders = settings.enable_missing_translation_placeholders,
            warnings = settings.log_i18n_warnings,
            "Loaded site settings"
        );
        Ok(settings)
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides<F>(settings: &mut SiteSettings, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup(ENV_DEFAULT_CONTENT_LANGUAGE) {
            debug!(var = ENV_DEFAULT_CONTENT_LANGUAGE, "Applying environment override");
            settings.default_content_language = language.trim().to_string();
        }

        if let Some(value) = lookup(ENV_ENABLE_MISSING_TRANSLATION_PLACEHOLDERS) {
            settings.enable_missing_translation_placeholders =
                parse_env_bool(ENV_ENABLE_MISSING_TRANSLATION_PLACEHOLDERS, &value)?;
        }

        if let Some(value) = lookup(ENV_LOG_I18N_WARNINGS) {
            settings.log_i18n_warnings = parse_env_bool(ENV_LOG_I18N_WARNINGS, &value)?;
        }

        Ok(())
    }
}

/// Interpret the usual spellings of a boolean flag.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_env_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).ok_or_else(|| ConfigError::EnvParse {
        var: var.to_string(),
        value: value.to_string(),
    })
}
