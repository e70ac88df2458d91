//! Stock HTTP error model for the errgraft injection engine
//!
//! This crate provides pure data types for HTTP errors, with no dependencies
//! on HTTP frameworks (the `axum` feature adds response integration). It
//! includes:
//! - Built-in error kind catalog (`KindDef`)
//! - JSON-bodied error values (`HttpError`)
//! - Explicit per-call construction options (`CallOptions`)
//! - The capability surface shared by stock and decorated errors
//!   (`HttpErrorLike`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod error;
pub mod options;

// Re-export commonly used types
pub use catalog::KindDef;
pub use error::{HttpError, HttpErrorLike};
pub use options::CallOptions;
