//! Fallback resolution of translated messages

use crate::args::ArgumentContext;
use crate::config::ResolverConfig;
use crate::store::TranslationStore;
use crate::template::{self, RenderError};
use sitelingo_common::DiagnosticLogger;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prefix of the string returned for a miss when placeholders are enabled
pub const MISSING_TRANSLATION_PREFIX: &str = "[i18n] ";

/// Tracing target of miss records
pub const MISSING_TRANSLATION_TARGET: &str = "sitelingo_i18n::missing";

/// Why nothing could be rendered
#[derive(Debug)]
enum MissReason {
    NotFound,
    RenderFailed(RenderError),
}

impl MissReason {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::RenderFailed(_) => "render_failed",
        }
    }
}

/// Resolves messages against a [`TranslationStore`] with fallback to the
/// default language.
///
/// Cloning is cheap; clones share the store and the configuration.
///
/// ```
/// use sitelingo_common::DiagnosticLogger;
/// use sitelingo_i18n::{ResolverConfig, TemplateArgs, TranslationStore, Translator};
///
/// let mut store = TranslationStore::new();
/// store.ingest("en", "- id: words\n  translation: \"{{ .WordCount }} words\"").unwrap();
///
/// let translator = Translator::new(store, ResolverConfig::new("en"), DiagnosticLogger::silent());
/// let t = translator.func("de");
///
/// let args = TemplateArgs::new().with("WordCount", 50);
/// assert_eq!(t("words", Some(&args)), "50 words");
/// assert_eq!(t("unknown", None), "");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    store: Arc<TranslationStore>,
    config: Arc<ResolverConfig>,
    logger: DiagnosticLogger,
}

impl Translator {
    /// Bind a populated store, a settings snapshot and a diagnostic sink
    pub fn new(
        store: impl Into<Arc<TranslationStore>>,
        config: ResolverConfig,
        logger: DiagnosticLogger,
    ) -> Self {
        let translator = Self {
            store: store.into(),
            config: Arc::new(config),
            logger,
        };

        translator.logger.in_scope(|| {
            debug!(
                default_language = translator.config.default_language(),
                languages = ?translator.store.languages(),
                placeholders = translator.config.emit_placeholder_on_miss(),
                "Translator created"
            );
        });
        translator
    }

    /// The store messages are resolved from
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// The settings snapshot
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolver bound to `language`
    pub fn resolver(&self, language: &str) -> LanguageResolver {
        if !self.store.has_language(language) {
            self.logger.in_scope(|| {
                info!(
                    language,
                    default_language = self.config.default_language(),
                    "Translation table for language not found, using default"
                );
            });
        }

        LanguageResolver {
            language: language.to_string(),
            translator: self.clone(),
        }
    }

    /// Resolution function bound to `language`.
    ///
    /// The function owns everything it needs, so it can be stored in
    /// template engines and called from any thread.
    pub fn func(
        &self,
        language: &str,
    ) -> impl Fn(&str, Option<&dyn ArgumentContext>) -> String + Send + Sync + 'static {
        let resolver = self.resolver(language);
        move |identifier: &str, args: Option<&dyn ArgumentContext>| {
            resolver.translate(identifier, args)
        }
    }

    /// One-off resolution without binding a resolver first
    pub fn translate(
        &self,
        language: &str,
        identifier: &str,
        args: Option<&dyn ArgumentContext>,
    ) -> String {
        self.resolve(language, identifier, args)
    }

    fn resolve(
        &self,
        language: &str,
        identifier: &str,
        args: Option<&dyn ArgumentContext>,
    ) -> String {
        let default_language = self.config.default_language();

        let template = self.store.lookup(language, identifier).or_else(|| {
            if language == default_language {
                None
            } else {
                self.store.lookup(default_language, identifier)
            }
        });

        let rendered = match template {
            Some(template) => template::render(template, args).map_err(MissReason::RenderFailed),
            None => Err(MissReason::NotFound),
        };

        rendered.unwrap_or_else(|reason| self.miss(language, identifier, &reason))
    }

    fn miss(&self, language: &str, identifier: &str, reason: &MissReason) -> String {
        self.logger.in_scope(|| {
            if self.config.log_warnings() {
                warn!(
                    target: MISSING_TRANSLATION_TARGET,
                    reason = reason.as_str(),
                    "i18n|MISSING_TRANSLATION|{}|{}",
                    language,
                    identifier
                );
                return;
            }

            match reason {
                MissReason::NotFound => debug!(
                    target: MISSING_TRANSLATION_TARGET,
                    language = %language,
                    identifier = %identifier,
                    reason = reason.as_str(),
                    "Translation not found"
                ),
                MissReason::RenderFailed(error) => debug!(
                    target: MISSING_TRANSLATION_TARGET,
                    language = %language,
                    identifier = %identifier,
                    reason = reason.as_str(),
                    error = %error,
                    "Translation not found"
                ),
            }
        });

        if self.config.emit_placeholder_on_miss() {
            format!("{MISSING_TRANSLATION_PREFIX}{identifier}")
        } else {
            String::new()
        }
    }
}

/// Resolution bound to one requested language.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    language: String,
    translator: Translator,
}

impl LanguageResolver {
    /// Requested language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render `identifier`, trying the requested language, then the default
    /// language; a miss yields `""` or `[i18n] <identifier>`.
    pub fn translate(&self, identifier: &str, args: Option<&dyn ArgumentContext>) -> String {
        self.translator.resolve(&self.language, identifier, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::TemplateArgs;
    use sitelingo_common::test_utils::CapturedLogs;
    use tracing::Level;

    fn store() -> TranslationStore {
        let mut store = TranslationStore::new();
        let en = concat!(
            "- id: hello\n  translation: Hello, World!\n",
            "- id: count\n  translation: \"{{ .Count }} items\"\n",
        );
        let es = concat!(
            "- id: hello\n  translation: ¡Hola, Mundo!\n",
            "- id: broken\n  translation: \"{{ .Count\"\n",
        );
        store.ingest("en", en).unwrap();
        store.ingest("es", es).unwrap();
        store
    }

    fn translator(config: ResolverConfig, logs: &CapturedLogs) -> Translator {
        Translator::new(
            store(),
            config,
            DiagnosticLogger::from_dispatch(logs.dispatch(Level::DEBUG)),
        )
    }

    fn miss_lines(logs: &CapturedLogs) -> Vec<String> {
        logs.lines()
            .into_iter()
            .filter(|line| line.contains(MISSING_TRANSLATION_TARGET))
            .collect()
    }

    #[test]
    fn test_current_language_then_default() {
        let logs = CapturedLogs::new();
        let translator = translator(ResolverConfig::new("en"), &logs);
        let args = TemplateArgs::new().with("Count", 3);

        assert_eq!(translator.translate("es", "hello", None), "¡Hola, Mundo!");
        assert_eq!(translator.translate("es", "count", Some(&args)), "3 items");
        assert_eq!(translator.translate("en", "hello", None), "Hello, World!");
        assert!(miss_lines(&logs).is_empty());
    }

    #[test]
    fn test_miss_policy() {
        let logs = CapturedLogs::new();
        let quiet = translator(ResolverConfig::new("en"), &logs);
        let loud = translator(ResolverConfig::new("en").with_placeholders(true), &logs);

        assert_eq!(quiet.translate("es", "nope", None), "");
        assert_eq!(loud.translate("es", "nope", None), "[i18n] nope");
        assert_eq!(loud.translate("en", "nope", None), "[i18n] nope");
        assert_eq!(miss_lines(&logs).len(), 3);
    }

    #[test]
    fn test_render_failure_is_a_miss() {
        let logs = CapturedLogs::new();
        let translator = translator(ResolverConfig::new("en").with_placeholders(true), &logs);

        // The es template exists, so the en one is not consulted.
        assert_eq!(translator.translate("es", "broken", None), "[i18n] broken");
        assert_eq!(translator.translate("en", "count", None), "[i18n] count");

        let lines = miss_lines(&logs);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.contains("render_failed")));
        assert!(lines[0].contains("unclosed action"));
    }

    #[test]
    fn test_warning_format() {
        let logs = CapturedLogs::new();
        let translator = translator(ResolverConfig::new("en").with_warnings(true), &logs);

        assert_eq!(translator.translate("es", "nope", None), "");

        let lines = miss_lines(&logs);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("i18n|MISSING_TRANSLATION|es|nope"));
    }

    #[test]
    fn test_resolver_for_unknown_language_logs_once() {
        let logs = CapturedLogs::new();
        let translator = translator(ResolverConfig::new("en"), &logs);
        logs.clear();

        let resolver = translator.resolver("fr");
        assert_eq!(resolver.language(), "fr");
        assert_eq!(resolver.translate("hello", None), "Hello, World!");
        assert_eq!(resolver.translate("hello", None), "Hello, World!");

        let notices: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|line| line.contains("Translation table for language not found"))
            .collect();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("INFO"));
    }

    #[test]
    fn test_func_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync + 'static>(_: &T) {}

        let logs = CapturedLogs::new();
        let t = translator(ResolverConfig::new("en"), &logs).func("es");
        assert_send_sync(&t);
        assert_eq!(t("hello", None), "¡Hola, Mundo!");
    }
}
