//! Tagged entity records forming the project-state document.
//!
//! Each entity family is an explicit record type, discriminated by where
//! it lives in [`ProjectState`] — never by field sniffing. The whole
//! document derives serde so the caller's intermediate JSON project file
//! maps directly onto it. The core never mutates a project state: every
//! operation borrows it immutably and returns fresh results.
//!
//! Names (`name` fields) are user-editable free text and may be
//! transiently empty or duplicated while the user is typing; they are
//! resolved to solver symbols and checked only when a committed snapshot
//! is validated.

use crate::catalog::{LoadKind, MeshFormat, PhysicsField, Topology};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an entity within its family.
///
/// Ids survive renames; user-facing names do not.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A mesh file listed in the project.
///
/// Immutable once listed; the `unit` is the solver logical unit slot the
/// read command will address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshSource {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// User-facing name; becomes the mesh concept symbol.
    pub name: String,
    /// File name the solver will read from the unit slot.
    pub filename: String,
    /// On-disk format.
    #[serde(default)]
    pub format: MeshFormat,
    /// Logical unit slot.
    pub unit: u32,
}

/// One entry of the mesh-inspection inventory: a named group and the
/// dimensional category of the entities it holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshGroup {
    /// Group name exactly as it appears in the mesh file.
    pub name: String,
    /// Dimensional category of the group's entities.
    pub topology: Topology,
}

/// Element characteristics attached to a model assignment.
///
/// Shells carry a thickness (plus offset and orientation vector); beams
/// carry a cross-section. Volume and point assignments carry none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionSpec {
    /// Shell: thickness, offset from the reference plane, and the
    /// local orientation vector.
    Shell {
        /// Shell thickness.
        thickness: f64,
        /// Offset from the reference plane.
        #[serde(default)]
        offset: f64,
        /// Local orientation vector.
        #[serde(default = "default_shell_vector")]
        vector: [f64; 3],
    },
    /// Rectangular beam cross-section.
    BeamRectangle {
        /// Section height.
        hy: f64,
        /// Section width.
        hz: f64,
    },
    /// Circular beam cross-section.
    BeamCircle {
        /// Section radius.
        r: f64,
    },
}

fn default_shell_vector() -> [f64; 3] {
    [1.0, 0.0, 0.0]
}

impl SectionSpec {
    /// The dimensional category this section shape belongs to.
    pub fn topology(&self) -> Topology {
        match self {
            SectionSpec::Shell { .. } => Topology::Surface,
            SectionSpec::BeamRectangle { .. } | SectionSpec::BeamCircle { .. } => Topology::Wire,
        }
    }
}

/// Assignment of an element formulation (and physics field) to a group.
///
/// Each group may carry at most one assignment across the whole set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelAssignment {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// Target group reference; must exist in the inspection inventory.
    pub group: String,
    /// Dimensional category the user configured the assignment for.
    pub topology: Topology,
    /// Element formulation, drawn from the category's catalogue.
    pub formulation: String,
    /// Physics field.
    #[serde(default)]
    pub field: PhysicsField,
    /// Optional element characteristics (shell thickness, beam section).
    #[serde(default)]
    pub section: Option<SectionSpec>,
}

/// A material definition: display name plus elastic properties.
///
/// Property values are free numeric text — they are coerced at emission
/// time and deliberately not range-validated, so partially-entered
/// materials never block editing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// Display name; unique case-insensitively across definitions.
    pub name: String,
    /// Property-key → raw numeric text (`E`, `NU`, `RHO`, optional `ALPHA`).
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

/// Assignment of one material to a set of groups.
///
/// A group may appear under exactly one assignment across the whole set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialAssignment {
    /// Display name of the assigned material.
    pub material: String,
    /// Groups receiving the material.
    #[serde(default)]
    pub groups: Vec<String>,
}

/// A boundary condition fixing degrees of freedom on a group.
///
/// The restrainable component set derives from the target group's
/// dimensional category. A component value is raw numeric text or the
/// literal marker `"free"` to leave that degree of freedom open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restraint {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// User-facing name; unique within the restraint family.
    pub name: String,
    /// Target group reference.
    pub group: String,
    /// DOF-key → raw value or `"free"`.
    #[serde(default)]
    pub components: IndexMap<String, String>,
}

/// An applied load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// User-facing name; unique within the load family.
    pub name: String,
    /// Load family.
    pub kind: LoadKind,
    /// Target group reference. May be empty only for gravity loads
    /// (global acceleration field).
    #[serde(default)]
    pub group: String,
    /// Component-key → raw numeric text.
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
}

/// A named excitation combination: references to restraints and loads
/// by name, not copies of the underlying objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Stable id.
    #[serde(default)]
    pub id: EntityId,
    /// Case name; becomes the result concept suffix.
    pub name: String,
    /// Names of the restraints this case applies.
    #[serde(default)]
    pub restraints: Vec<String>,
    /// Names of the loads this case applies.
    #[serde(default)]
    pub loads: Vec<String>,
}

/// Linear solver tuning. Absent settings fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Resolution method keyword.
    #[serde(default = "default_method")]
    pub method: String,
    /// Relative residual tolerance. Must be positive to be meaningful.
    #[serde(default = "default_resi_rela")]
    pub resi_rela: f64,
    /// Pivot memory percentage, conventionally in `[0, 100]`.
    #[serde(default = "default_pcent_pivot")]
    pub pcent_pivot: f64,
}

impl SolverSettings {
    /// Method keywords the solver accepts.
    pub const KNOWN_METHODS: [&'static str; 5] =
        ["MUMPS", "MULT_FRONT", "LDLT", "GCPC", "PETSC"];
}

fn default_method() -> String {
    "MUMPS".to_string()
}

fn default_resi_rela() -> f64 {
    1e-6
}

fn default_pcent_pivot() -> f64 {
    35.0
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            method: default_method(),
            resi_rela: default_resi_rela(),
            pcent_pivot: default_pcent_pivot(),
        }
    }
}

/// The root project-state document: every entity collection, in the
/// caller's edit order.
///
/// # Examples
///
/// ```
/// use commforge_core::entity::ProjectState;
///
/// let project: ProjectState = serde_json::from_str(
///     r#"{ "meshes": [{ "name": "Deck", "filename": "deck.med", "unit": 20 }] }"#,
/// )
/// .unwrap();
/// assert_eq!(project.meshes.len(), 1);
/// assert!(project.solver.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    /// Mesh files, in listing order.
    #[serde(default)]
    pub meshes: Vec<MeshSource>,
    /// Mesh-inspection group inventory.
    #[serde(default)]
    pub groups: Vec<MeshGroup>,
    /// Model assignments.
    #[serde(default)]
    pub models: Vec<ModelAssignment>,
    /// Material definitions.
    #[serde(default)]
    pub materials: Vec<MaterialDefinition>,
    /// Material-to-group assignments.
    #[serde(default)]
    pub material_assignments: Vec<MaterialAssignment>,
    /// Boundary conditions.
    #[serde(default)]
    pub restraints: Vec<Restraint>,
    /// Applied loads.
    #[serde(default)]
    pub loads: Vec<Load>,
    /// Named excitation combinations.
    #[serde(default)]
    pub load_cases: Vec<LoadCase>,
    /// Optional solver tuning; defaults are injected when absent.
    #[serde(default)]
    pub solver: Option<SolverSettings>,
}

impl ProjectState {
    /// Look up a group in the inspection inventory.
    pub fn group(&self, name: &str) -> Option<&MeshGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Dimensional category of a group, if it exists.
    pub fn group_topology(&self, name: &str) -> Option<Topology> {
        self.group(name).map(|g| g.topology)
    }

    /// The effective solver settings: explicit ones, or the defaults.
    pub fn solver_settings(&self) -> SolverSettings {
        self.solver.clone().unwrap_or_default()
    }
}
