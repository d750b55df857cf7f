//! Fixed solver catalogues: dimensional categories, element formulations,
//! physics fields, degree-of-freedom sets, and load families.
//!
//! The keyword vocabulary here is the external solver contract — the
//! strings are not negotiable and are emitted verbatim into the command
//! script. Everything in this module is a static table; no instance state.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Dimensional categories ─────────────────────────────────────────

/// Dimensional category of a mesh group (what kind of entities it holds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// 0D — isolated nodes (point supports, point masses).
    Node,
    /// 1D — edge/line elements (beams, bars).
    Wire,
    /// 2D — face elements (shells, plates).
    Surface,
    /// 3D — volume elements (solids).
    Volume,
}

impl Topology {
    /// Conventional dimension label used in diagnostics (`0D`..`3D`).
    pub fn dimension_label(self) -> &'static str {
        match self {
            Topology::Node => "0D",
            Topology::Wire => "1D",
            Topology::Surface => "2D",
            Topology::Volume => "3D",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension_label())
    }
}

/// Element formulations legal for a dimensional category.
///
/// An assignment whose formulation is not in its category's catalogue is
/// structurally invalid. The catalogue is the mechanical one; pairing a
/// thermal or acoustic field with a mechanical-only formulation is a
/// compatibility warning, not an error.
pub fn formulations(topology: Topology) -> &'static [&'static str] {
    match topology {
        Topology::Node => &["DIS_T", "DIS_TR"],
        Topology::Wire => &["POU_D_T", "POU_D_E", "BARRE"],
        Topology::Surface => &["DKT", "DST", "COQUE_3D"],
        Topology::Volume => &["3D", "3D_SI"],
    }
}

/// Whether a formulation only makes sense for the mechanical field.
///
/// `3D` is the one field-neutral modelisation; everything else in the
/// catalogue is a structural element family.
pub fn is_mechanical_only(formulation: &str) -> bool {
    formulation != "3D"
}

// ── Physics fields ─────────────────────────────────────────────────

/// Physics field an assignment participates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsField {
    /// Structural mechanics (the default).
    #[default]
    Mechanical,
    /// Heat transfer.
    Thermal,
    /// Acoustics.
    Acoustic,
}

impl PhysicsField {
    /// Solver keyword for the `PHENOMENE` operand.
    pub fn phenomene(self) -> &'static str {
        match self {
            PhysicsField::Mechanical => "MECANIQUE",
            PhysicsField::Thermal => "THERMIQUE",
            PhysicsField::Acoustic => "ACOUSTIQUE",
        }
    }
}

// ── Mesh formats ───────────────────────────────────────────────────

/// On-disk format of a mesh source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshFormat {
    /// MED (the exchange format, default).
    #[default]
    Med,
    /// The solver's native mesh format.
    Native,
}

impl MeshFormat {
    /// Solver keyword for the `FORMAT` operand.
    pub fn keyword(self) -> &'static str {
        match self {
            MeshFormat::Med => "MED",
            MeshFormat::Native => "ASTER",
        }
    }
}

// ── Degrees of freedom ─────────────────────────────────────────────

/// A nodal degree of freedom that a restraint may fix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dof {
    /// Rotation about X.
    Drx,
    /// Rotation about Y.
    Dry,
    /// Rotation about Z.
    Drz,
    /// Translation along X.
    Dx,
    /// Translation along Y.
    Dy,
    /// Translation along Z.
    Dz,
}

/// Fixed emission order for restraint components: rotations before
/// translations, each axis-ordered.
pub const DOF_EMISSION_ORDER: [Dof; 6] = [
    Dof::Drx,
    Dof::Dry,
    Dof::Drz,
    Dof::Dx,
    Dof::Dy,
    Dof::Dz,
];

const TRANSLATION_DOFS: [Dof; 3] = [Dof::Dx, Dof::Dy, Dof::Dz];

impl Dof {
    /// Solver keyword for this component.
    pub fn key(self) -> &'static str {
        match self {
            Dof::Drx => "DRX",
            Dof::Dry => "DRY",
            Dof::Drz => "DRZ",
            Dof::Dx => "DX",
            Dof::Dy => "DY",
            Dof::Dz => "DZ",
        }
    }

    /// Parse a component key (exact, uppercase).
    pub fn from_key(key: &str) -> Option<Dof> {
        match key {
            "DRX" => Some(Dof::Drx),
            "DRY" => Some(Dof::Dry),
            "DRZ" => Some(Dof::Drz),
            "DX" => Some(Dof::Dx),
            "DY" => Some(Dof::Dy),
            "DZ" => Some(Dof::Dz),
            _ => None,
        }
    }
}

impl fmt::Display for Dof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The set of DOFs restrainable on a group of the given category.
///
/// Volume elements carry translational DOFs only; point, wire, and
/// surface groups (discrete, beam, and shell formulations) expose the
/// full six-component set.
pub fn restrainable_dofs(topology: Topology) -> &'static [Dof] {
    match topology {
        Topology::Volume => &TRANSLATION_DOFS,
        _ => &DOF_EMISSION_ORDER,
    }
}

// ── Load families ──────────────────────────────────────────────────

/// Component and parameter keys used by load and material records.
pub mod keys {
    /// Young's modulus.
    pub const E: &str = "E";
    /// Poisson ratio.
    pub const NU: &str = "NU";
    /// Density.
    pub const RHO: &str = "RHO";
    /// Thermal expansion coefficient (optional).
    pub const ALPHA: &str = "ALPHA";
    /// Material property keys that must be present on every definition.
    pub const REQUIRED_PROPERTIES: [&str; 3] = [E, NU, RHO];

    /// Force along X.
    pub const FX: &str = "FX";
    /// Force along Y.
    pub const FY: &str = "FY";
    /// Force along Z.
    pub const FZ: &str = "FZ";
    /// Moment about X.
    pub const MX: &str = "MX";
    /// Moment about Y.
    pub const MY: &str = "MY";
    /// Moment about Z.
    pub const MZ: &str = "MZ";
    /// Pressure magnitude.
    pub const PRES: &str = "PRES";
    /// Gravity magnitude.
    pub const GRAVITE: &str = "GRAVITE";
    /// Gravity direction, X component.
    pub const DIR_X: &str = "DIR_X";
    /// Gravity direction, Y component.
    pub const DIR_Y: &str = "DIR_Y";
    /// Gravity direction, Z component.
    pub const DIR_Z: &str = "DIR_Z";
}

/// Family of a load, fixing its operand keyword, group addressing, and
/// parameter catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    /// Global acceleration field (`PESANTEUR`).
    Gravity,
    /// Point loads on node groups (`FORCE_NODALE`).
    NodalForce,
    /// Surface traction vector (`FORCE_FACE`).
    FaceForce,
    /// Normal pressure (`PRES_REP`).
    Pressure,
    /// Linear load on edge groups (`FORCE_ARETE`).
    EdgeForce,
}

impl LoadKind {
    /// Operand keyword inside the excitation command.
    pub fn operand(self) -> &'static str {
        match self {
            LoadKind::Gravity => "PESANTEUR",
            LoadKind::NodalForce => "FORCE_NODALE",
            LoadKind::FaceForce => "FORCE_FACE",
            LoadKind::Pressure => "PRES_REP",
            LoadKind::EdgeForce => "FORCE_ARETE",
        }
    }

    /// Group addressing keyword: nodal forces target node groups, every
    /// other family targets element groups.
    pub fn group_keyword(self) -> &'static str {
        match self {
            LoadKind::NodalForce => "GROUP_NO",
            _ => "GROUP_MA",
        }
    }

    /// Parameter keys this family accepts, in emission order.
    pub fn allowed_parameters(self) -> &'static [&'static str] {
        match self {
            LoadKind::Gravity => &[keys::GRAVITE, keys::DIR_X, keys::DIR_Y, keys::DIR_Z],
            LoadKind::NodalForce => &[keys::FX, keys::FY, keys::FZ, keys::MX, keys::MY, keys::MZ],
            LoadKind::FaceForce | LoadKind::EdgeForce => &[keys::FX, keys::FY, keys::FZ],
            LoadKind::Pressure => &[keys::PRES],
        }
    }

    /// Parameter keys that must be present for the family to be emittable.
    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            LoadKind::Gravity => &[keys::GRAVITE],
            LoadKind::Pressure => &[keys::PRES],
            _ => &[],
        }
    }

    /// Dimensional categories this family conventionally applies to.
    /// A mismatch is advisory, not structural.
    pub fn allowed_topologies(self) -> &'static [Topology] {
        match self {
            LoadKind::Gravity => &[Topology::Volume],
            LoadKind::NodalForce => &[Topology::Node],
            LoadKind::FaceForce => &[Topology::Surface],
            LoadKind::Pressure => &[Topology::Surface, Topology::Volume],
            LoadKind::EdgeForce => &[Topology::Wire],
        }
    }

    /// Whether the group reference may be omitted (global gravity).
    pub fn group_optional(self) -> bool {
        matches!(self, LoadKind::Gravity)
    }
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operand())
    }
}
