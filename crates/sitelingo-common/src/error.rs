//! Error types and utilities for sitelingo

use thiserror::Error;

/// Result type alias for sitelingo operations
pub type Result<T> = std::result::Result<T, SitelingoError>;

/// Main error type for sitelingo operations
#[derive(Error, Debug)]
pub enum SitelingoError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Translation ingestion and localization errors
    #[error("Localization error: {message}")]
    Localization {
        /// What went wrong
        message: String,
        /// Language the failing operation targeted
        language: Option<String>,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for settings or input data
    #[error("Validation error: {message}")]
    Validation {
        /// What is wrong with the value
        message: String,
        /// Name of the offending field
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// What went wrong
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SitelingoError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            language: None,
            source: None,
        }
    }

    /// Create a new localization error tied to a language code
    pub fn localization_with_language(
        msg: impl Into<String>,
        language: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            language: Some(language.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// The language code attached to a localization error, if any
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Localization { language, .. } => language.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = SitelingoError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = SitelingoError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let validation_error = SitelingoError::validation_field("Invalid input", "language");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));

        let localization_error = SitelingoError::localization("Translation missing");
        assert_eq!(
            localization_error.to_string(),
            "Localization error: Translation missing"
        );
        assert_eq!(localization_error.language(), None);
    }

    #[test]
    fn test_localization_error_keeps_language_and_source() {
        let cause = io::Error::new(io::ErrorKind::InvalidData, "bad yaml");
        let error = SitelingoError::localization_with_language("Failed to ingest", "es", cause);

        assert_eq!(error.language(), Some("es"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#)
            .unwrap_err();
        let error: SitelingoError = serde_error.into();

        assert!(error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = SitelingoError::config_with_source("Middle layer", root_error);
        let top_error = SitelingoError::with_source("Top layer", middle_error);

        let mut current_error: &dyn Error = &top_error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
        }

        assert_eq!(depth, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
