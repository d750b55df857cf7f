//! Synthetic project builders shared by the commforge benchmarks.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use commforge_core::{
    EntityId, Load, LoadCase, LoadKind, MaterialAssignment, MaterialDefinition, MeshFormat,
    MeshGroup, MeshSource, ModelAssignment, PhysicsField, ProjectState, Restraint, Topology,
};
use indexmap::IndexMap;

fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build a synthetic project with `groups` volume groups, one material
/// and one restraint/load pair per group, and one load case per group.
pub fn synthetic_project(groups: usize) -> ProjectState {
    let mut project = ProjectState {
        meshes: vec![
            MeshSource {
                id: EntityId(1),
                name: "Main".to_string(),
                filename: "main.med".to_string(),
                format: MeshFormat::Med,
                unit: 20,
            },
            MeshSource {
                id: EntityId(2),
                name: "Fixtures".to_string(),
                filename: "fixtures.med".to_string(),
                format: MeshFormat::Med,
                unit: 21,
            },
        ],
        ..ProjectState::default()
    };

    for i in 0..groups {
        let group = format!("Zone_{i}");
        project.groups.push(MeshGroup {
            name: group.clone(),
            topology: Topology::Volume,
        });
        project.models.push(ModelAssignment {
            id: EntityId(100 + i as u64),
            group: group.clone(),
            topology: Topology::Volume,
            formulation: "3D".to_string(),
            field: PhysicsField::Mechanical,
            section: None,
        });
        project.materials.push(MaterialDefinition {
            id: EntityId(200 + i as u64),
            name: format!("Material {i}"),
            properties: map(&[("E", "210000"), ("NU", "0,3"), ("RHO", "7.85e-9")]),
        });
        project.material_assignments.push(MaterialAssignment {
            material: format!("Material {i}"),
            groups: vec![group.clone()],
        });
        project.restraints.push(Restraint {
            id: EntityId(300 + i as u64),
            name: format!("fix {i}"),
            group: group.clone(),
            components: map(&[("DX", "0"), ("DY", "0"), ("DZ", "0")]),
        });
        project.loads.push(Load {
            id: EntityId(400 + i as u64),
            name: format!("press {i}"),
            kind: LoadKind::Pressure,
            group: group.clone(),
            parameters: map(&[("PRES", "0.2")]),
        });
        project.load_cases.push(LoadCase {
            id: EntityId(500 + i as u64),
            name: format!("case {i}"),
            restraints: vec![format!("fix {i}")],
            loads: vec![format!("press {i}")],
        });
    }

    project
}
