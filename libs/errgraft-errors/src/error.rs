//! JSON-bodied HTTP error values (pure data model, no HTTP framework dependencies)

use std::fmt;

use http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::catalog::{self, KindDef};
use crate::options::CallOptions;

/// Capability surface shared by stock and decorated errors.
///
/// This is the identity contract: any value implementing it exposes the
/// kind name, status, message, and a serializable body, whether or not it
/// has been through an injector. Decorators delegate everything except
/// `to_json`, which they may answer from a cache.
pub trait HttpErrorLike: std::error::Error {
    fn name(&self) -> &str;
    fn status_code(&self) -> StatusCode;
    fn message(&self) -> &str;
    fn body(&self) -> &Map<String, Value>;
    fn to_json(&self) -> Map<String, Value>;
}

/// A stock HTTP error as the wrapped library produces it.
///
/// The body always carries `code` and `message`; `message` defaults to the
/// empty string when no explicit option supplies one.
#[derive(Debug, Clone)]
#[must_use]
pub struct HttpError {
    name: String,
    status: StatusCode,
    body: Map<String, Value>,
}

impl HttpError {
    /// Constructs an error of a built-in kind.
    pub fn new(def: &KindDef, opts: &CallOptions) -> Self {
        // Invalid catalog statuses fall back to 500.
        let status =
            StatusCode::from_u16(def.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::with_parts(def.name, status, def.code, opts)
    }

    /// Constructs an error from owned parts; used for dynamically defined
    /// kinds and synthesized statuses.
    pub fn with_parts(
        name: impl Into<String>,
        status: StatusCode,
        code: impl Into<String>,
        opts: &CallOptions,
    ) -> Self {
        let mut body = Map::new();
        body.insert("code".to_owned(), Value::String(code.into()));
        body.insert(
            "message".to_owned(),
            Value::String(opts.message().unwrap_or("").to_owned()),
        );
        Self {
            name: name.into(),
            status,
            body,
        }
    }

    /// Constructs an error directly from an HTTP status code, synthesizing
    /// a kind for statuses outside the catalog.
    pub fn from_status(status: StatusCode) -> Self {
        match catalog::for_status(status.as_u16()) {
            Some(def) => Self::new(def, &CallOptions::new()),
            None => {
                let (name, code) = catalog::synthesize(status);
                Self::with_parts(name, status, code, &CallOptions::new())
            }
        }
    }

    /// Mutable body access. Stock `to_json` re-derives from the body, so
    /// mutations here are visible in later snapshots.
    pub fn body_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.body
    }
}

impl HttpErrorLike for HttpError {
    fn name(&self) -> &str {
        &self.name
    }

    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn message(&self) -> &str {
        self.body.get("message").and_then(Value::as_str).unwrap_or("")
    }

    fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    fn to_json(&self) -> Map<String, Value> {
        self.body.clone()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message())
    }
}

impl std::error::Error for HttpError {}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.body.serialize(serializer)
    }
}

/// Axum integration: respond with the error's status and JSON body
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_populates_stock_fields() {
        let err = HttpError::new(&catalog::NOT_IMPLEMENTED, &CallOptions::new());
        assert_eq!(err.name(), "NotImplementedError");
        assert_eq!(err.status_code(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(err.body().get("code"), Some(&json!("NotImplemented")));
        assert_eq!(err.body().get("message"), Some(&json!("")));
    }

    #[test]
    fn explicit_message_lands_in_body() {
        let opts = CallOptions::new().set("message", "Hello World");
        let err = HttpError::new(&catalog::NOT_IMPLEMENTED, &opts);
        assert_eq!(err.message(), "Hello World");
    }

    #[test]
    fn unrelated_options_do_not_touch_the_body() {
        let opts = CallOptions::new().set("dragon", "🐉");
        let err = HttpError::new(&catalog::NOT_EXTENDED, &opts);
        assert!(!err.body().contains_key("dragon"));
    }

    #[test]
    fn from_status_uses_the_catalog() {
        let err = HttpError::from_status(StatusCode::IM_A_TEAPOT);
        assert_eq!(err.name(), "ImATeapotError");
        assert_eq!(err.body().get("code"), Some(&json!("ImATeapot")));
    }

    #[test]
    fn from_status_synthesizes_unknown_kinds() {
        let err = HttpError::from_status(StatusCode::from_u16(599).unwrap());
        assert_eq!(err.name(), "Http599Error");
        assert_eq!(err.body().get("code"), Some(&json!("Http599")));
        assert_eq!(err.status_code().as_u16(), 599);
    }

    #[test]
    fn to_json_snapshots_the_body() {
        let mut err = HttpError::from_status(StatusCode::NOT_FOUND);
        let before = err.to_json();
        err.body_mut().insert("extra".to_owned(), json!(1));
        assert!(!before.contains_key("extra"));
        assert!(err.to_json().contains_key("extra"));
    }

    #[test]
    fn serializes_as_its_body() {
        let err = HttpError::from_status(StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, json!({"code": "NotFound", "message": ""}));
    }

    #[test]
    fn display_includes_name_and_message() {
        let opts = CallOptions::new().set("message", "missing thing");
        let err = HttpError::new(&catalog::NOT_FOUND, &opts);
        assert_eq!(err.to_string(), "NotFoundError: missing thing");
    }
}
