//! Argument contexts for template rendering
//!
//! A template only ever asks its context for a field by name. Anything that
//! can answer that question implements [`ArgumentContext`]: JSON values,
//! string-keyed maps, and [`TemplateArgs`], which can also be built from any
//! `Serialize` type.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Field lookup by name for template rendering.
pub trait ArgumentContext {
    /// Value of the field `name`, or `None` if the context has no such field
    fn field(&self, name: &str) -> Option<Value>;

    /// The context as a whole, used by `{{ . }}`
    fn value(&self) -> Option<Value> {
        None
    }
}

impl ArgumentContext for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object()?.get(name).cloned()
    }

    fn value(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl<V: Serialize> ArgumentContext for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(|value| serde_json::to_value(value).ok())
    }
}

impl<V: Serialize> ArgumentContext for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(|value| serde_json::to_value(value).ok())
    }
}

/// Owned argument context.
///
/// ```
/// use sitelingo_i18n::TemplateArgs;
///
/// let args = TemplateArgs::new().with("WordCount", 50).with("Title", "Intro");
/// assert_eq!(args.get("WordCount"), Some(&serde_json::json!(50)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateArgs {
    root: Value,
}

impl Default for TemplateArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateArgs {
    /// Create a context without fields
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Create a context that is a single value, rendered by `{{ . }}`
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self { root: value.into() }
    }

    /// Capture the fields of any serializable value.
    ///
    /// Field names are the serialized names, so `#[serde(rename_all = "PascalCase")]`
    /// exposes `word_count` as `WordCount`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(|root| Self { root })
    }

    /// Add a field
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a field, turning a scalar context into a map
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if !self.root.is_object() {
            self.root = Value::Object(Map::new());
        }
        if let Value::Object(fields) = &mut self.root {
            fields.insert(key.into(), value.into());
        }
    }

    /// Borrow a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The underlying JSON value
    pub const fn as_value(&self) -> &Value {
        &self.root
    }
}

impl ArgumentContext for TemplateArgs {
    fn field(&self, name: &str) -> Option<Value> {
        self.root.field(name)
    }

    fn value(&self) -> Option<Value> {
        Some(self.root.clone())
    }
}

impl From<Value> for TemplateArgs {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

/// Build [`TemplateArgs`] from `key => value` pairs.
///
/// ```
/// let args = sitelingo_i18n::template_args!["Name" => "Ada", "Count" => 3];
/// assert_eq!(args.get("Count"), Some(&serde_json::json!(3)));
/// ```
#[macro_export]
macro_rules! template_args {
    () => {
        $crate::TemplateArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::TemplateArgs::new();
        $(
            args.set($key, $value);
        )+
        args
    }};
}
