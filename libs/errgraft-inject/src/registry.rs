//! Registry of custom options and their default-value policies

use std::collections::BTreeMap;
use std::fmt;

use http::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Default-value provider, called with the body's machine code, the
/// error's HTTP status, and the body's human message. `None` means "no
/// value": the option stays absent for that instance.
pub type Provider = Box<dyn Fn(&str, StatusCode, &str) -> Option<Value> + Send + Sync>;

/// Default-value policy for a registered option.
pub enum OptionDefault {
    /// No default: the field appears only when supplied per call.
    None,
    /// Constant used whenever the option is otherwise unset.
    Value(Value),
    /// Computed per instance from the error's own (code, status, message).
    Provider(Provider),
}

impl OptionDefault {
    /// Wraps a closure as a per-instance provider.
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn(&str, StatusCode, &str) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Provider(Box::new(f))
    }

    /// Wraps any JSON-convertible value as a constant default.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub(crate) fn resolve(&self, code: &str, status: StatusCode, message: &str) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Value(value) => Some(value.clone()),
            Self::Provider(f) => f(code, status, message),
        }
    }
}

impl fmt::Debug for OptionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl From<Value> for OptionDefault {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for OptionDefault {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_owned()))
    }
}

impl From<String> for OptionDefault {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

/// Mapping from option name to default policy. Keys are unique; iteration
/// order is deterministic and never observable through patching.
#[derive(Debug, Default)]
pub(crate) struct OptionRegistry {
    entries: BTreeMap<String, OptionDefault>,
}

impl OptionRegistry {
    /// Registers an option, replacing any previous policy for the name.
    pub(crate) fn add(&mut self, name: impl Into<String>, default: OptionDefault) {
        let name = name.into();
        debug!(option = %name, "registering custom option");
        self.entries.insert(name, default);
    }

    /// Removes an option; silently does nothing when absent.
    pub(crate) fn delete(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            debug!(option = %name, "removed custom option");
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &OptionDefault)> {
        self.entries.iter().map(|(name, default)| (name.as_str(), default))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constants_resolve_regardless_of_arguments() {
        let default = OptionDefault::constant("🦄");
        assert_eq!(
            default.resolve("NotFound", StatusCode::NOT_FOUND, ""),
            Some(json!("🦄"))
        );
        assert_eq!(
            default.resolve("Conflict", StatusCode::CONFLICT, "x"),
            Some(json!("🦄"))
        );
    }

    #[test]
    fn omitted_default_resolves_to_nothing() {
        let default = OptionDefault::None;
        assert_eq!(default.resolve("NotFound", StatusCode::NOT_FOUND, ""), None);
    }

    #[test]
    fn providers_see_the_instance_context() {
        let default = OptionDefault::provider(|code, status, message| {
            Some(json!(format!("{code}/{status}/{message}", status = status.as_u16())))
        });
        assert_eq!(
            default.resolve("Gone", StatusCode::GONE, "bye"),
            Some(json!("Gone/410/bye"))
        );
    }

    #[test]
    fn delete_is_a_no_op_for_unknown_names() {
        let mut registry = OptionRegistry::default();
        registry.delete("never-added");

        registry.add("errno", OptionDefault::constant(""));
        registry.delete("errno");
        registry.delete("errno");
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn add_replaces_existing_entries() {
        let mut registry = OptionRegistry::default();
        registry.add("errno", OptionDefault::constant("old"));
        registry.add("errno", OptionDefault::constant("new"));

        let (_, default) = registry.iter().next().unwrap();
        assert_eq!(
            default.resolve("", StatusCode::OK, ""),
            Some(json!("new"))
        );
        assert_eq!(registry.iter().count(), 1);
    }
}
