//! Error types for translation ingestion

use crate::fragment::FragmentFormat;
use sitelingo_common::SitelingoError;
use thiserror::Error;

/// Errors that can occur while ingesting translation fragments.
///
/// Resolution never fails; these are only returned from ingestion.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Fragment content is not valid structured-record text
    #[error("Failed to parse {format} fragment for language '{language}': {message}")]
    Parse {
        /// Language the fragment was destined for
        language: String,
        /// Syntax the fragment was parsed as
        format: FragmentFormat,
        /// Parser message
        message: String,
    },

    /// Fragment parsed, but one of its records is unusable
    #[error("Invalid record #{index} in fragment for language '{language}': {reason}")]
    InvalidRecord {
        /// Language the fragment was destined for
        language: String,
        /// Zero-based position of the record in the fragment
        index: usize,
        /// Why the record was rejected
        reason: String,
    },

    /// Fragment name carries an extension no parser exists for
    #[error("Unsupported fragment format '{extension}' in '{name}'")]
    UnsupportedFormat {
        /// Fragment label as given
        name: String,
        /// Extension no parser exists for
        extension: String,
    },

    /// No usable language code could be determined
    #[error("Invalid language code in fragment '{0}'")]
    InvalidLanguage(String),
}

impl I18nError {
    /// Language the failing fragment was destined for, if known
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Parse { language, .. } | Self::InvalidRecord { language, .. } => Some(language),
            Self::UnsupportedFormat { .. } | Self::InvalidLanguage(_) => None,
        }
    }
}

impl From<I18nError> for SitelingoError {
    fn from(err: I18nError) -> Self {
        match err.language().map(str::to_owned) {
            Some(language) => {
                Self::localization_with_language("Failed to ingest translations", language, err)
            }
            None => Self::Localization {
                message: err.to_string(),
                language: None,
                source: Some(Box::new(err)),
            },
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
