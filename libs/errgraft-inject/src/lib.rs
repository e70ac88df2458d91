//! Option injection engine for HTTP error bodies
//!
//! Splices caller-configured extra fields into the JSON body of every
//! error built through an [`Injector`], without changing how the stock
//! error types construct, print, or serialize otherwise.
//!
//! ```
//! use errgraft_inject::Injector;
//! use errgraft_errors::{CallOptions, HttpErrorLike};
//!
//! let mut injector = Injector::new();
//! injector.add("errno", "ERROR");
//!
//! let err = injector
//!     .build("NotFoundError", &CallOptions::new())
//!     .unwrap();
//! assert_eq!(err.body()["errno"], "ERROR");
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod injector;
pub mod patch;
pub mod registry;

// Re-export commonly used types
pub use injector::{Injector, KindOptions};
pub use patch::InjectedError;
pub use registry::{OptionDefault, Provider};
