//! Explicit per-call construction options

use serde_json::{Map, Value};

/// Explicit options supplied when constructing an error.
///
/// The options parameter is always present in construction signatures; an
/// empty bag means "no explicit options". Keys other than `message` are
/// ignored by the stock constructor and only become visible in the body
/// when an injector has a matching registered option.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CallOptions {
    fields: Map<String, Value>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit field value. An explicit `Value::Null` counts as a
    /// defined value and is written verbatim.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The one key the stock constructor consumes itself. Non-string
    /// values are treated as not provided.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for CallOptions {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for CallOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
