//! Entity validators for project-state documents.
//!
//! One pure function per entity family, each from entity-set to a
//! [`ValidationReport`](commforge_core::ValidationReport). Validators are
//! local: they see one family (plus the group inventory where references
//! must resolve) and never each other's results. Cross-entity rules —
//! load cases referencing restraint and load names — live in the project
//! aggregator, which also merges all family reports.
//!
//! Validators run on committed snapshots. Transiently-invalid state
//! (duplicate or empty names while the user is typing) is the caller's
//! business; it must simply not be fed here until commit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod excitation;
pub mod material;
pub mod mesh;
pub mod model;
pub mod solver;

pub use excitation::{validate_loads, validate_restraints};
pub use material::validate_materials;
pub use mesh::{validate_meshes, DEFAULT_UNIT_WINDOW};
pub use model::validate_models;
pub use solver::validate_solver;

/// Diagnostic label for an entity: `family 'name'` when the name is
/// usable, `family [index]` otherwise.
pub(crate) fn label(family: &str, index: usize, name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        format!("{family} [{index}]")
    } else {
        format!("{family} '{trimmed}'")
    }
}
