//! Body patching: resolves registered options into a freshly built error

use std::fmt;

use http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use errgraft_errors::{CallOptions, HttpError, HttpErrorLike};

use crate::registry::OptionRegistry;

/// A stock error with custom options grafted into its body.
///
/// Delegates the whole capability surface to the wrapped [`HttpError`];
/// only `to_json` differs, answering from the snapshot cached at patch
/// time rather than re-deriving from the body.
#[derive(Debug)]
pub struct InjectedError {
    inner: HttpError,
    json: Map<String, Value>,
}

impl InjectedError {
    /// Mutable body access. The cached JSON snapshot does not follow
    /// mutations made here.
    pub fn body_mut(&mut self) -> &mut Map<String, Value> {
        self.inner.body_mut()
    }
}

/// Resolves every registered option against a freshly constructed error.
///
/// Resolution per option, highest priority first: an explicit per-call
/// value (even null, even shadowing a stock field), then a non-empty
/// existing body field, then the registered default. The empty string
/// counts as unset, so empty stock placeholders are replaced by defaults.
/// An unresolved option stays entirely absent from body and JSON.
pub(crate) fn patch(
    mut inner: HttpError,
    opts: &CallOptions,
    registry: &OptionRegistry,
) -> InjectedError {
    let mut json = inner.to_json();

    // Providers observe the instance as the stock constructor left it,
    // so resolution order cannot matter.
    let code = inner
        .body()
        .get("code")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_owned();
    let status = inner.status_code();
    let message = inner.message().to_owned();

    for (name, default) in registry.iter() {
        let resolved = match opts.get(name) {
            Some(value) => Some(value.clone()),
            None => match inner.body().get(name) {
                Some(value) if !is_unset(value) => Some(value.clone()),
                _ => default.resolve(&code, status, &message),
            },
        };
        if let Some(value) = resolved {
            inner.body_mut().insert(name.to_owned(), value.clone());
            json.insert(name.to_owned(), value);
        }
    }

    InjectedError { inner, json }
}

// The stock constructor writes empty-string placeholders for unset
// fields; those count as absent for default resolution.
fn is_unset(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

impl HttpErrorLike for InjectedError {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    fn message(&self) -> &str {
        self.inner.message()
    }

    fn body(&self) -> &Map<String, Value> {
        self.inner.body()
    }

    fn to_json(&self) -> Map<String, Value> {
        self.json.clone()
    }
}

impl fmt::Display for InjectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for InjectedError {}

impl Serialize for InjectedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.json.serialize(serializer)
    }
}

/// Axum integration: respond with the cached JSON, mirroring `to_json`
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for InjectedError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp
    }
}
