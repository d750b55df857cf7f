//! Command builders for the commforge engine.
//!
//! Each builder consumes an already-validated entity set plus the
//! project's resolved [`NameTable`] and returns an ordered [`Section`]
//! of text blocks. Builders never re-validate and must not be called on
//! data with active validation errors — that gate lives in the project
//! aggregator. Everything here is pure: same input, byte-identical
//! output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod context;
pub mod excitation;
pub mod material;
pub mod mesh;
pub mod model;

pub use block::{Block, Command, Factor, Section, Value};
pub use context::NameTable;
pub use excitation::{build_load_case_section, build_load_section, build_restraint_section};
pub use material::{build_material_section, has_material_field};
pub use mesh::build_mesh_section;
pub use model::{build_model_section, has_element_characteristics};
