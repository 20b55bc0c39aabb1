//! Per-language message tables

use crate::error::{I18nError, I18nResult};
use crate::fragment::{self, FragmentFormat, FragmentName};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One message of one language: an identifier and its template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    identifier: String,
    template: String,
}

impl MessageDefinition {
    /// Create a definition
    pub fn new(identifier: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            template: template.into(),
        }
    }

    /// Message identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Template text, possibly containing `{{ .Field }}` placeholders
    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Messages of a single language keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    messages: HashMap<String, MessageDefinition>,
}

impl LanguageTable {
    /// Definition for `identifier`, if present
    pub fn get(&self, identifier: &str) -> Option<&MessageDefinition> {
        self.messages.get(identifier)
    }

    /// Whether `identifier` has a definition
    pub fn contains(&self, identifier: &str) -> bool {
        self.messages.contains_key(identifier)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the table holds no definitions
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Definitions in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &MessageDefinition> {
        self.messages.values()
    }

    fn merge(&mut self, definitions: Vec<MessageDefinition>) {
        for definition in definitions {
            let identifier = definition.identifier.clone();
            self.messages.insert(identifier, definition);
        }
    }
}

/// Message tables for every ingested language.
///
/// Populate with the `ingest*` methods, then hand the store to a
/// [`Translator`](crate::Translator); from then on it is only read.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    tables: HashMap<String, LanguageTable>,
}

impl TranslationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a YAML fragment into the table of `language`.
    ///
    /// Either every record of the fragment is merged or, on error, none is.
    pub fn ingest(&mut self, language: &str, content: &str) -> I18nResult<()> {
        self.ingest_with_format(language, content, FragmentFormat::Yaml)
    }

    /// Merge a fragment identified by a filename-like label (`es.yaml`).
    ///
    /// The language code and the format are inferred from the label.
    pub fn ingest_named(&mut self, name: &str, content: &str) -> I18nResult<()> {
        let FragmentName { language, format } = FragmentName::parse(name)?;
        self.ingest_with_format(&language, content, format)
    }

    /// Merge a fragment of an explicit format into the table of `language`.
    pub fn ingest_with_format(
        &mut self,
        language: &str,
        content: &str,
        format: FragmentFormat,
    ) -> I18nResult<()> {
        if !fragment::is_valid_language(language) {
            return Err(I18nError::InvalidLanguage(language.to_string()));
        }

        let definitions = fragment::parse_fragment(language, content, format).map_err(|e| {
            warn!(language, %format, error = %e, "Discarding translation fragment");
            e
        })?;

        let count = definitions.len();
        let table = self.tables.entry(language.to_string()).or_default();
        table.merge(definitions);

        debug!(
            language,
            merged = count,
            total = table.len(),
            "Ingested translation fragment"
        );
        Ok(())
    }

    /// Template for `identifier` in `language`, without any fallback
    pub fn lookup(&self, language: &str, identifier: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|table| table.get(identifier))
            .map(MessageDefinition::template)
    }

    /// Whether `language` has a definition for `identifier`
    pub fn contains(&self, language: &str, identifier: &str) -> bool {
        self.lookup(language, identifier).is_some()
    }

    /// Table of `language`, if it was ingested
    pub fn table(&self, language: &str) -> Option<&LanguageTable> {
        self.tables.get(language)
    }

    /// Whether any fragment was ingested for `language`
    pub fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Ingested language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Total number of definitions across all languages
    pub fn message_count(&self) -> usize {
        self.tables.values().map(LanguageTable::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_has_no_fallback() {
        let mut store = TranslationStore::new();
        store.ingest("en", "- id: hello\n  translation: Hi").unwrap();

        assert_eq!(store.lookup("en", "hello"), Some("Hi"));
        assert_eq!(store.lookup("es", "hello"), None);
        assert_eq!(store.lookup("EN", "hello"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = TranslationStore::new();
        let fragment = "- id: hello\n  translation: First\n- id: hello\n  translation: Second";
        store.ingest("en", fragment).unwrap();
        assert_eq!(store.lookup("en", "hello"), Some("Second"));

        let replacement = "- id: hello\n  translation: Third";
        store.ingest("en", replacement).unwrap();
        assert_eq!(store.lookup("en", "hello"), Some("Third"));
        assert_eq!(store.table("en").unwrap().len(), 1);
    }

    #[test]
    fn test_failed_fragment_is_atomic() {
        let mut store = TranslationStore::new();
        store
            .ingest("es", "- id: hello\n  translation: Hola")
            .unwrap();

        let partly_valid = "- id: goodbye\n  translation: Adiós\n- translation: sin id\n";
        let result = store.ingest("es", partly_valid);
        assert!(matches!(result, Err(I18nError::InvalidRecord { .. })));

        assert_eq!(store.lookup("es", "hello"), Some("Hola"));
        assert!(!store.contains("es", "goodbye"));
        assert_eq!(store.message_count(), 1);
    }

    #[test]
    fn test_blank_fragment_registers_empty_table() {
        let mut store = TranslationStore::new();
        store.ingest("en", "").unwrap();

        assert!(store.has_language("en"));
        assert!(store.table("en").unwrap().is_empty());
        assert_eq!(store.message_count(), 0);
    }

    #[test]
    fn test_ingest_named_infers_language_and_format() {
        let mut store = TranslationStore::new();
        store
            .ingest_named("i18n/de.json", r#"[{"id": "hello", "translation": "Hallo"}]"#)
            .unwrap();
        store
            .ingest_named("sv.toml", "[hello]\ntranslation = \"Hej\"")
            .unwrap();

        assert_eq!(store.languages(), vec!["de", "sv"]);
        assert_eq!(store.lookup("sv", "hello"), Some("Hej"));
    }

    #[test]
    fn test_invalid_language_hint() {
        let mut store = TranslationStore::new();
        assert!(matches!(
            store.ingest(" ", "- id: a\n  translation: b"),
            Err(I18nError::InvalidLanguage(_))
        ));
        assert!(store.languages().is_empty());
    }
}
