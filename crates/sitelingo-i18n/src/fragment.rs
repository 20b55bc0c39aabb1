//! Parsing of translation fragments into message definitions
//!
//! A fragment is the text of one translation source (typically one file such
//! as `es.yaml`) handed over by the host. Parsing is all-or-nothing: either
//! every record is usable or the whole fragment is rejected.

use crate::error::{I18nError, I18nResult};
use crate::store::MessageDefinition;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Syntax of a translation fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FragmentFormat {
    /// A YAML list of `{id, translation}` maps
    #[default]
    Yaml,
    /// A JSON array of `{id, translation}` objects
    Json,
    /// A TOML document with one `[id]` table per message holding `translation`
    Toml,
}

impl FragmentFormat {
    /// Map a file extension to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for FragmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        };
        f.write_str(name)
    }
}

/// Language code and format derived from a filename-like fragment label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentName {
    /// Everything in the basename before the first `.`
    pub language: String,
    /// Format implied by the final extension
    pub format: FragmentFormat,
}

impl FragmentName {
    /// Infer language and format from labels such as `en.yaml`,
    /// `i18n/pt-BR.toml` or `fr.all.json`. A label without extension is YAML.
    pub fn parse(name: &str) -> I18nResult<Self> {
        let basename = name.rsplit(['/', '\\']).next().unwrap_or(name);

        let (language, format) = match basename.split_once('.') {
            None => (basename, FragmentFormat::default()),
            Some((language, rest)) => {
                let extension = rest.rsplit('.').next().unwrap_or(rest);
                let format = FragmentFormat::from_extension(extension).ok_or_else(|| {
                    I18nError::UnsupportedFormat {
                        name: name.to_string(),
                        extension: extension.to_string(),
                    }
                })?;
                (language, format)
            }
        };

        if !is_valid_language(language) {
            return Err(I18nError::InvalidLanguage(name.to_string()));
        }

        Ok(Self {
            language: language.to_string(),
            format,
        })
    }
}

/// Whether `language` is usable as a table key.
pub(crate) fn is_valid_language(language: &str) -> bool {
    !language.is_empty() && !language.chars().any(char::is_whitespace)
}

/// Parse fragment text into message definitions.
///
/// Blank content (whitespace or YAML comments only) yields no definitions.
/// Records whose translation is absent or empty are untranslated and are
/// skipped. A later record with the same id replaces an earlier one.
pub fn parse_fragment(
    language: &str,
    content: &str,
    format: FragmentFormat,
) -> I18nResult<Vec<MessageDefinition>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parse_error = |message: String| I18nError::Parse {
        language: language.to_string(),
        format,
        message,
    };

    let document: Value = match format {
        FragmentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        FragmentFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        FragmentFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            return toml_definitions(language, table);
        }
    };

    let records = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Array(records) => records,
        other => {
            return Err(parse_error(format!(
                "expected a list of records, found {}",
                value_kind(&other)
            )))
        }
    };

    let mut definitions = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let invalid = |reason: String| I18nError::InvalidRecord {
            language: language.to_string(),
            index,
            reason,
        };

        let mut fields = match record {
            Value::Object(fields) => fields,
            other => return Err(invalid(format!("expected a map, found {}", value_kind(&other)))),
        };

        let identifier = match fields.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                let kind = value_kind(&other);
                return Err(invalid(format!("id must be a string, found {kind}")));
            }
            None => return Err(invalid("missing id".to_string())),
        };
        if identifier.trim().is_empty() {
            return Err(invalid("id must not be blank".to_string()));
        }

        if let Some(template) = translation_text(fields.remove("translation")).map_err(invalid)? {
            definitions.push(MessageDefinition::new(identifier, template));
        }
    }

    debug!(
        language,
        %format,
        definitions = definitions.len(),
        "Parsed translation fragment"
    );
    Ok(definitions)
}

/// Plural category keys of CLDR, as go-i18n writes them.
const PLURAL_CATEGORIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

fn toml_definitions(language: &str, table: toml::Table) -> I18nResult<Vec<MessageDefinition>> {
    let mut definitions = Vec::with_capacity(table.len());
    let mut index = 0;
    collect_toml(language, None, table, &mut index, &mut definitions)?;
    Ok(definitions)
}

/// Walk `[id]` tables. Nested headers such as `[nav.home]` parse as a
/// sub-table and become the dotted identifier `nav.home`.
fn collect_toml(
    language: &str,
    prefix: Option<&str>,
    table: toml::Table,
    index: &mut usize,
    definitions: &mut Vec<MessageDefinition>,
) -> I18nResult<()> {
    for (key, entry) in table {
        let identifier = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        let record = *index;
        *index += 1;
        let invalid = |reason: String| I18nError::InvalidRecord {
            language: language.to_string(),
            index: record,
            reason,
        };

        let toml::Value::Table(mut fields) = entry else {
            return Err(invalid(format!("'{identifier}' must be a table")));
        };

        let translation = match fields.remove("translation") {
            None => None,
            Some(toml::Value::String(text)) => Some(Value::String(text)),
            Some(other) => {
                return Err(invalid(format!(
                    "translation of '{identifier}' must be a string, found {}",
                    other.type_str()
                )))
            }
        };

        if translation.is_none() {
            let plural = PLURAL_CATEGORIES
                .iter()
                .find(|category| fields.get(**category).is_some_and(|value| !value.is_table()));
            if let Some(category) = plural {
                return Err(invalid(format!(
                    "plural translation forms are not supported ('{identifier}.{category}')"
                )));
            }
        }

        if let Some(template) = translation_text(translation).map_err(&invalid)? {
            definitions.push(MessageDefinition::new(identifier.clone(), template));
        }

        let nested: toml::Table = fields
            .into_iter()
            .filter(|(_, value)| value.is_table())
            .collect();
        if !nested.is_empty() {
            collect_toml(language, Some(&identifier), nested, index, definitions)?;
        }
    }
    Ok(())
}

/// `Ok(None)` marks an untranslated record.
fn translation_text(translation: Option<Value>) -> Result<Option<String>, String> {
    match translation {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Object(_)) => Err("plural translation forms are not supported".to_string()),
        Some(other) => Err(format!(
            "translation must be a string, found {}",
            value_kind(&other)
        )),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
