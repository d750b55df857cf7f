//! Commforge: deterministic solver-command synthesis for finite-element
//! project documents.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all commforge sub-crates. For most users, adding `commforge` as
//! a single dependency is sufficient: build (or deserialize) a
//! [`ProjectState`](types::ProjectState), then call
//! [`generate`](study::generate).
//!
//! # Quick start
//!
//! ```rust
//! use commforge::prelude::*;
//!
//! let project = ProjectState {
//!     meshes: vec![MeshSource {
//!         id: EntityId(1),
//!         name: "Deck".into(),
//!         filename: "deck.med".into(),
//!         format: MeshFormat::Med,
//!         unit: 20,
//!     }],
//!     groups: vec![MeshGroup {
//!         name: "Deck_Faces".into(),
//!         topology: Topology::Surface,
//!     }],
//!     models: vec![ModelAssignment {
//!         id: EntityId(2),
//!         group: "Deck_Faces".into(),
//!         topology: Topology::Surface,
//!         formulation: "DKT".into(),
//!         field: PhysicsField::Mechanical,
//!         section: None,
//!     }],
//!     ..ProjectState::default()
//! };
//!
//! let document = generate(&project, &StudyConfig::default()).unwrap();
//! assert!(document.script().contains("DECK = LIRE_MAILLAGE("));
//! assert!(document.script().contains("MODELE = AFFE_MODELE("));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `commforge-core` | Symbols, entity records, catalogues, numerics |
//! | [`validate`] | `commforge-validate` | Per-family entity validators |
//! | [`emit`] | `commforge-emit` | The block grammar and command builders |
//! | [`study`] | `commforge-study` | Aggregation, configuration, document assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Symbols, entity records, catalogues, and numerics (`commforge-core`).
pub use commforge_core as types;

/// Per-family entity validators (`commforge-validate`).
pub use commforge_validate as validate;

/// The block grammar and command builders (`commforge-emit`).
pub use commforge_emit as emit;

/// Aggregation, configuration, and document assembly (`commforge-study`).
pub use commforge_study as study;

/// The types most callers need, re-exported flat.
pub mod prelude {
    pub use commforge_core::symbol::{sanitize, unique_name, Symbol};
    pub use commforge_core::{
        Dof, EntityId, Load, LoadCase, LoadKind, MaterialAssignment, MaterialDefinition,
        MeshFormat, MeshGroup, MeshSource, ModelAssignment, PhysicsField, ProjectState,
        Restraint, SectionSpec, SolverSettings, Topology, ValidationReport,
    };
    pub use commforge_study::{
        generate, validate_project, ConfigError, StudyConfig, StudyDocument, StudyError,
    };
}
