//! Constructor interception: every error-producing entry point funnels
//! through the body patcher

use std::collections::BTreeMap;

use http::StatusCode;
use tracing::debug;

use errgraft_errors::{CallOptions, HttpError, catalog};

use crate::patch::{self, InjectedError};
use crate::registry::{OptionDefault, OptionRegistry};

/// One record per error kind known to the injector.
#[derive(Debug, Clone)]
struct KindRecord {
    status: StatusCode,
    code: String,
}

/// Options for dynamically defined kinds. Status defaults to 500, the
/// machine code to the kind name without its `Error` suffix.
#[derive(Debug, Clone, Default)]
pub struct KindOptions {
    pub status_code: Option<StatusCode>,
    pub code: Option<String>,
}

/// The option injection engine.
///
/// Holds the custom-option registry and the table of interceptable error
/// kinds, pre-seeded with every built-in kind. Callers keep the handle;
/// there is no process-wide state. Mutations take `&mut self` and the
/// injector has no internal locking; a fully configured instance is
/// `Send + Sync` and can be shared read-only across threads.
#[derive(Debug)]
pub struct Injector {
    registry: OptionRegistry,
    kinds: BTreeMap<String, KindRecord>,
}

impl Injector {
    #[must_use]
    pub fn new() -> Self {
        let kinds = catalog::ALL
            .iter()
            .map(|def| {
                let status = StatusCode::from_u16(def.status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    def.name.to_owned(),
                    KindRecord {
                        status,
                        code: def.code.to_owned(),
                    },
                )
            })
            .collect();
        Self {
            registry: OptionRegistry::default(),
            kinds,
        }
    }

    /// Registers a custom option. The default may be a constant (any
    /// JSON-convertible value via [`OptionDefault::constant`] or the
    /// `From` impls), a per-instance provider, or [`OptionDefault::None`]
    /// for "no default". Registering an existing name replaces its policy.
    pub fn add(&mut self, name: impl Into<String>, default: impl Into<OptionDefault>) {
        self.registry.add(name, default.into());
    }

    /// Removes a custom option, restoring pre-registration behavior for
    /// errors built afterwards. Unknown names are silently ignored.
    pub fn delete(&mut self, name: &str) {
        self.registry.delete(name);
    }

    /// Builds an error of a named kind, exactly as the stock constructor
    /// would, then patches every registered option into its body. Returns
    /// `None` for a kind name that was never defined.
    #[must_use]
    pub fn build(&self, kind: &str, opts: &CallOptions) -> Option<InjectedError> {
        let record = self.kinds.get(kind)?;
        let inner = HttpError::with_parts(kind, record.status, record.code.clone(), opts);
        Some(patch::patch(inner, opts, &self.registry))
    }

    /// Defines a brand-new error kind by name. Idempotent: a kind is
    /// enhanced at most once, so redefining an existing name (built-in or
    /// dynamic) is a no-op and never changes its record.
    pub fn make_constructor(&mut self, name: &str, opts: KindOptions) {
        if self.kinds.contains_key(name) {
            return;
        }
        let record = KindRecord {
            status: opts.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code: opts
                .code
                .unwrap_or_else(|| catalog::derive_code(name).to_owned()),
        };
        debug!(kind = %name, status = %record.status, "defining error kind");
        self.kinds.insert(name.to_owned(), record);
    }

    /// Builds an error directly from an HTTP status code and patches it
    /// with empty options; this entry point has no room for per-call
    /// overrides.
    #[must_use]
    pub fn from_status(&self, status: StatusCode) -> InjectedError {
        let inner = HttpError::from_status(status);
        patch::patch(inner, &CallOptions::new(), &self.registry)
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}
