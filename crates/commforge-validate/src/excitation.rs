//! Restraint (boundary condition) and load validation.
//!
//! Name uniqueness is per family: two restraints may not share a name,
//! nor two loads, but a restraint and a load may — load cases reference
//! the two families through separate lists.

use crate::label;
use commforge_core::catalog::restrainable_dofs;
use commforge_core::numeric::{coerce, is_free_marker};
use commforge_core::{Dof, Load, LoadKind, MeshGroup, Restraint, ValidationReport};
use indexmap::IndexMap;

/// Validate the restraint family.
///
/// Errors: empty or duplicate names, missing/unknown groups, component
/// keys that are not DOFs or not restrainable on the group's category.
/// Warnings: a restraint that fixes no component at all.
pub fn validate_restraints(restraints: &[Restraint], groups: &[MeshGroup]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_names: IndexMap<String, usize> = IndexMap::new();

    for (index, restraint) in restraints.iter().enumerate() {
        let who = label("restraint", index, &restraint.name);

        check_name(&mut report, &who, index, &restraint.name, &mut seen_names);

        let topology = if restraint.group.trim().is_empty() {
            report.error(format!("{who}: group reference is required"));
            None
        } else {
            let found = groups.iter().find(|g| g.name == restraint.group);
            if found.is_none() {
                report.error(format!(
                    "{who}: group '{}' does not exist in the mesh",
                    restraint.group
                ));
            }
            found.map(|g| g.topology)
        };

        let mut fixes_any = false;
        for (key, value) in &restraint.components {
            let normalized = key.trim().to_ascii_uppercase();
            let Some(dof) = Dof::from_key(&normalized) else {
                report.error(format!("{who}: '{key}' is not a degree of freedom"));
                continue;
            };
            if let Some(topology) = topology {
                if !restrainable_dofs(topology).contains(&dof) {
                    report.error(format!(
                        "{who}: component {dof} is not restrainable on a {topology} group"
                    ));
                }
            }
            if !is_free_marker(value) {
                fixes_any = true;
            }
        }
        if !fixes_any {
            report.warning(format!("{who}: fixes no components"));
        }
    }

    report
}

/// Validate the load family.
///
/// Errors: empty or duplicate names, missing/unknown groups (gravity may
/// omit its group), parameter keys outside the family catalogue, missing
/// required parameters. Warnings: a load whose target category does not
/// match the family's convention, a force load with no effective
/// component.
pub fn validate_loads(loads: &[Load], groups: &[MeshGroup]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_names: IndexMap<String, usize> = IndexMap::new();

    for (index, load) in loads.iter().enumerate() {
        let who = label("load", index, &load.name);

        check_name(&mut report, &who, index, &load.name, &mut seen_names);

        if load.group.trim().is_empty() {
            if !load.kind.group_optional() {
                report.error(format!("{who}: group reference is required"));
            }
        } else {
            match groups.iter().find(|g| g.name == load.group) {
                None => {
                    report.error(format!(
                        "{who}: group '{}' does not exist in the mesh",
                        load.group
                    ));
                }
                Some(found) if !load.kind.allowed_topologies().contains(&found.topology) => {
                    report.warning(format!(
                        "{who}: {} load on a {} group",
                        load.kind, found.topology
                    ));
                }
                Some(_) => {}
            }
        }

        let allowed = load.kind.allowed_parameters();
        for key in load.parameters.keys() {
            let normalized = key.trim().to_ascii_uppercase();
            if !allowed.contains(&normalized.as_str()) {
                report.error(format!(
                    "{who}: parameter '{key}' is not valid for {} ({})",
                    load.kind,
                    allowed.join(", ")
                ));
            }
        }
        for required in load.kind.required_parameters() {
            let present = load
                .parameters
                .keys()
                .any(|k| k.trim().eq_ignore_ascii_case(required));
            if !present {
                report.error(format!("{who}: required parameter {required} is missing"));
            }
        }

        if matches!(
            load.kind,
            LoadKind::NodalForce | LoadKind::FaceForce | LoadKind::EdgeForce
        ) {
            let effective = load.parameters.values().any(|v| coerce(v) != 0.0);
            if !effective {
                report.warning(format!("{who}: no force components; load has no effect"));
            }
        }
    }

    report
}

/// Shared name checks: empty is an error, exact duplicates within the
/// family are errors naming the earlier entity.
fn check_name(
    report: &mut ValidationReport,
    who: &str,
    index: usize,
    name: &str,
    seen: &mut IndexMap<String, usize>,
) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        report.error(format!("{who}: name is empty"));
        return;
    }
    if let Some(previous) = seen.insert(trimmed.to_string(), index) {
        report.error(format!("{who}: name duplicates entry [{previous}]"));
    }
}
