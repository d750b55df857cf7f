//! Mesh read and assembly commands.

use crate::block::{Command, Section, Value};
use crate::context::NameTable;
use commforge_core::{MeshSource, Symbol};

/// Build the mesh section: one read command per source in input order,
/// then a left fold of binary assembly commands when more than one
/// source exists.
///
/// The solver grammar only supports binary merge, so N sources produce
/// exactly N−1 assembly blocks, each accumulating into `mesh_result`.
/// A single source short-circuits assembly entirely: the source concept
/// itself is the final mesh. Returns the section and the final mesh
/// symbol (`None` when the project lists no meshes).
pub fn build_mesh_section(
    meshes: &[MeshSource],
    names: &NameTable,
    mesh_result: &Symbol,
) -> (Section, Option<Symbol>) {
    let mut section = Section::new("Meshes");
    let mut symbols: Vec<Symbol> = Vec::with_capacity(meshes.len());

    for mesh in meshes {
        let Some(symbol) = names.mesh(&mesh.name) else {
            continue;
        };
        section.push(
            Command::assign(symbol.clone(), "LIRE_MAILLAGE")
                .arg("UNITE", Value::Int(i64::from(mesh.unit)))
                .arg("FORMAT", Value::text(mesh.format.keyword())),
        );
        symbols.push(symbol.clone());
    }

    let final_mesh = match symbols.as_slice() {
        [] => None,
        [only] => Some(only.clone()),
        [first, rest @ ..] => {
            let mut accumulator = first.clone();
            for next in rest {
                section.push(
                    Command::assign(mesh_result.clone(), "ASSE_MAILLAGE")
                        .arg("MAILLAGE_1", Value::Ref(accumulator))
                        .arg("MAILLAGE_2", Value::Ref(next.clone()))
                        .arg("OPERATION", Value::text("SUPERPOSE")),
                );
                accumulator = mesh_result.clone();
            }
            Some(accumulator)
        }
    };

    (section, final_mesh)
}
