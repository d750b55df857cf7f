//! Deterministic name resolution for a whole project.
//!
//! Every emitted concept lives in one global solver namespace, so the
//! table allocates symbols for all families against a single taken-set,
//! walking each family in document order. For a fixed project the
//! resulting symbols never change, which keeps generated scripts
//! byte-stable across runs.

use commforge_core::symbol::{unique_name, Symbol};
use commforge_core::ProjectState;
use indexmap::{IndexMap, IndexSet};

/// Canonical symbols for every named entity in a project.
///
/// Lookup keys are the user-facing names: exact (trimmed) for meshes,
/// restraints, loads, and cases; case-insensitive for materials, whose
/// display names are unique case-insensitively.
#[derive(Clone, Debug)]
pub struct NameTable {
    meshes: IndexMap<String, Symbol>,
    materials: IndexMap<String, Symbol>,
    restraints: IndexMap<String, Symbol>,
    loads: IndexMap<String, Symbol>,
    cases: IndexMap<String, Symbol>,
}

impl NameTable {
    /// Allocate symbols for every entity, seeding the namespace with the
    /// caller's reserved result concepts (final mesh, model, material
    /// field, element characteristics) so no entity can shadow them.
    pub fn resolve(project: &ProjectState, reserved: &[Symbol]) -> NameTable {
        let mut taken: IndexSet<Symbol> = reserved.iter().cloned().collect();

        let mut meshes = IndexMap::new();
        for mesh in &project.meshes {
            allocate(&mut meshes, &mut taken, mesh.name.trim(), &mesh.name);
        }

        let mut materials = IndexMap::new();
        for material in &project.materials {
            let key = material.name.trim().to_lowercase();
            let base = format!("M_{}", material.name);
            allocate(&mut materials, &mut taken, &key, &base);
        }

        let mut restraints = IndexMap::new();
        for restraint in &project.restraints {
            allocate(
                &mut restraints,
                &mut taken,
                restraint.name.trim(),
                &restraint.name,
            );
        }

        let mut loads = IndexMap::new();
        for load in &project.loads {
            allocate(&mut loads, &mut taken, load.name.trim(), &load.name);
        }

        let mut cases = IndexMap::new();
        for case in &project.load_cases {
            let base = format!("RESU_{}", case.name);
            allocate(&mut cases, &mut taken, case.name.trim(), &base);
        }

        NameTable {
            meshes,
            materials,
            restraints,
            loads,
            cases,
        }
    }

    /// Symbol of a mesh source, by its user-facing name.
    pub fn mesh(&self, name: &str) -> Option<&Symbol> {
        self.meshes.get(name.trim())
    }

    /// Symbol of a material definition, by display name (case-insensitive).
    pub fn material(&self, name: &str) -> Option<&Symbol> {
        self.materials.get(&name.trim().to_lowercase())
    }

    /// Symbol of a restraint, by name.
    pub fn restraint(&self, name: &str) -> Option<&Symbol> {
        self.restraints.get(name.trim())
    }

    /// Symbol of a load, by name.
    pub fn load(&self, name: &str) -> Option<&Symbol> {
        self.loads.get(name.trim())
    }

    /// Result symbol of a load case, by case name.
    pub fn case(&self, name: &str) -> Option<&Symbol> {
        self.cases.get(name.trim())
    }
}

/// Insert `key → unique_name(base)` unless the key already resolved
/// (first occurrence wins; duplicates were rejected upstream).
fn allocate(
    table: &mut IndexMap<String, Symbol>,
    taken: &mut IndexSet<Symbol>,
    key: &str,
    base: &str,
) {
    if table.contains_key(key) {
        return;
    }
    let symbol = unique_name(base, taken);
    taken.insert(symbol.clone());
    table.insert(key.to_string(), symbol);
}
