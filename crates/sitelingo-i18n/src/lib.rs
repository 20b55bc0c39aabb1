//! # Sitelingo I18n
//!
//! Translation resolution core for sitelingo.
//!
//! Per-language message tables are ingested into a [`TranslationStore`].
//! A [`Translator`] binds the store to a [`ResolverConfig`] and hands out
//! per-language resolution functions: the requested language is tried
//! first, then the default language, and whatever is found is rendered
//! against the caller's [`ArgumentContext`]. When nothing can be rendered
//! the function returns an empty string or an `[i18n] <id>` placeholder
//! and records the miss through the injected
//! [`DiagnosticLogger`](sitelingo_common::DiagnosticLogger).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod config;
pub mod error;
pub mod fragment;
pub mod store;
pub mod template;
pub mod translator;

pub use args::{ArgumentContext, TemplateArgs};
pub use config::ResolverConfig;
pub use error::{I18nError, I18nResult};
pub use fragment::{FragmentFormat, FragmentName};
pub use store::{LanguageTable, MessageDefinition, TranslationStore};
pub use template::RenderError;
pub use translator::{
    LanguageResolver, Translator, MISSING_TRANSLATION_PREFIX, MISSING_TRANSLATION_TARGET,
};
