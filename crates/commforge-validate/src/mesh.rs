//! Mesh source validation.

use crate::label;
use commforge_core::{MeshSource, ValidationReport};
use indexmap::IndexMap;
use std::ops::RangeInclusive;

/// Conventional logical-unit allocation window for mesh read commands.
///
/// Slots outside this window still emit — the solver accepts them — but
/// they collide easily with units reserved for other file kinds, so they
/// only draw a warning.
pub const DEFAULT_UNIT_WINDOW: RangeInclusive<u32> = 20..=99;

/// Validate the mesh source list.
///
/// Errors: empty name or filename, duplicate names, duplicate unit
/// slots. Warnings: unit slots outside `unit_window`.
pub fn validate_meshes(
    meshes: &[MeshSource],
    unit_window: &RangeInclusive<u32>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_units: IndexMap<u32, String> = IndexMap::new();
    let mut seen_names: IndexMap<String, usize> = IndexMap::new();

    for (index, mesh) in meshes.iter().enumerate() {
        let who = label("mesh", index, &mesh.name);

        if mesh.name.trim().is_empty() {
            report.error(format!("{who}: name is empty"));
        }
        if mesh.filename.trim().is_empty() {
            report.error(format!("{who}: filename is empty"));
        }

        if let Some(previous) = seen_units.insert(mesh.unit, mesh.name.trim().to_string()) {
            report.error(format!(
                "{who}: unit slot {} is already used by mesh '{previous}'",
                mesh.unit
            ));
        }
        if !unit_window.contains(&mesh.unit) {
            report.warning(format!(
                "{who}: unit slot {} is outside the conventional window {}..={}",
                mesh.unit,
                unit_window.start(),
                unit_window.end()
            ));
        }

        let name_key = mesh.name.trim().to_string();
        if !name_key.is_empty() {
            if seen_names.insert(name_key, index).is_some() {
                report.error(format!("{who}: duplicate mesh name"));
            }
        }
    }

    report
}
