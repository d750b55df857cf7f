//! Project aggregation for the commforge engine.
//!
//! This crate composes the name registry, the entity validators, and the
//! command builders into the one operation callers care about:
//! [`generate`] turns a project-state snapshot into either a complete
//! [`StudyDocument`] or the merged error report — never a partial
//! script. [`validate_project`] exposes the same merged validation pass
//! standalone, for callers that only want diagnostics.
//!
//! Generation is pure and deterministic: calling it twice on the same
//! snapshot yields byte-identical scripts, which keeps project history
//! diffable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod document;

pub use aggregate::{generate, validate_project, StudyError};
pub use config::{ConfigError, StudyConfig};
pub use document::StudyDocument;
