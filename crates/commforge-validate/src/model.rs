//! Model assignment validation.

use crate::label;
use commforge_core::catalog::{formulations, is_mechanical_only};
use commforge_core::symbol::is_valid_group_ref;
use commforge_core::{MeshGroup, ModelAssignment, PhysicsField, SectionSpec, ValidationReport};
use indexmap::IndexMap;

/// Validate model assignments against the mesh-group inventory.
///
/// Errors: missing/illegal/unknown group references, a group claimed by
/// two assignments, a formulation outside its category catalogue, a
/// section shape contradicting the category. Warnings: a non-mechanical
/// field on a mechanical-only formulation, an assignment category that
/// disagrees with the inventory, non-positive section dimensions.
pub fn validate_models(models: &[ModelAssignment], groups: &[MeshGroup]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut claimed: IndexMap<&str, usize> = IndexMap::new();

    for (index, model) in models.iter().enumerate() {
        let who = label("model assignment", index, &model.group);

        if model.group.trim().is_empty() {
            report.error(format!("{who}: group reference is required"));
        } else if !is_valid_group_ref(&model.group) {
            report.error(format!(
                "{who}: group reference '{}' is not a legal symbol",
                model.group
            ));
        } else {
            match groups.iter().find(|g| g.name == model.group) {
                None => {
                    report.error(format!(
                        "{who}: group '{}' does not exist in the mesh",
                        model.group
                    ));
                }
                Some(found) if found.topology != model.topology => {
                    report.warning(format!(
                        "{who}: configured as {} but the mesh group is {}",
                        model.topology, found.topology
                    ));
                }
                Some(_) => {}
            }

            if let Some(previous) = claimed.insert(model.group.as_str(), index) {
                report.error(format!(
                    "{who}: group '{}' is already assigned by model assignment [{previous}]",
                    model.group
                ));
            }
        }

        let catalogue = formulations(model.topology);
        if !catalogue.contains(&model.formulation.as_str()) {
            report.error(format!(
                "{who}: formulation '{}' is not in the {} catalogue ({})",
                model.formulation,
                model.topology,
                catalogue.join(", ")
            ));
        } else if model.field != PhysicsField::Mechanical && is_mechanical_only(&model.formulation)
        {
            report.warning(format!(
                "{who}: {} field paired with mechanical-only formulation '{}'",
                model.field.phenomene(),
                model.formulation
            ));
        }

        if let Some(section) = &model.section {
            validate_section(&mut report, &who, model, section);
        }
    }

    report
}

fn validate_section(
    report: &mut ValidationReport,
    who: &str,
    model: &ModelAssignment,
    section: &SectionSpec,
) {
    if section.topology() != model.topology {
        report.error(format!(
            "{who}: {} section data on a {} assignment",
            section.topology(),
            model.topology
        ));
        return;
    }
    match section {
        SectionSpec::Shell { thickness, .. } => {
            if *thickness <= 0.0 {
                report.warning(format!("{who}: shell thickness {thickness} is not positive"));
            }
        }
        SectionSpec::BeamRectangle { hy, hz } => {
            if *hy <= 0.0 || *hz <= 0.0 {
                report.warning(format!(
                    "{who}: beam section {hy} x {hz} has a non-positive dimension"
                ));
            }
        }
        SectionSpec::BeamCircle { r } => {
            if *r <= 0.0 {
                report.warning(format!("{who}: beam radius {r} is not positive"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commforge_core::{EntityId, Topology};

    fn inventory() -> Vec<MeshGroup> {
        vec![
            MeshGroup {
                name: "Deck".to_string(),
                topology: Topology::Surface,
            },
            MeshGroup {
                name: "Piers".to_string(),
                topology: Topology::Volume,
            },
        ]
    }

    fn assignment(group: &str, topology: Topology, formulation: &str) -> ModelAssignment {
        ModelAssignment {
            id: EntityId(0),
            group: group.to_string(),
            topology,
            formulation: formulation.to_string(),
            field: PhysicsField::Mechanical,
            section: None,
        }
    }

    #[test]
    fn valid_assignments_pass() {
        let models = vec![
            assignment("Deck", Topology::Surface, "DKT"),
            assignment("Piers", Topology::Volume, "3D"),
        ];
        let report = validate_models(&models, &inventory());
        assert!(report.is_valid(), "{report}");
    }

    #[test]
    fn unknown_group_is_an_error() {
        let models = vec![assignment("Ghost", Topology::Surface, "DKT")];
        let report = validate_models(&models, &inventory());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("does not exist"));
    }

    #[test]
    fn duplicate_group_claim_is_an_error() {
        let models = vec![
            assignment("Deck", Topology::Surface, "DKT"),
            assignment("Deck", Topology::Surface, "DST"),
        ];
        let report = validate_models(&models, &inventory());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("already assigned"));
    }

    #[test]
    fn formulation_outside_catalogue_is_an_error() {
        let models = vec![assignment("Deck", Topology::Surface, "POU_D_T")];
        let report = validate_models(&models, &inventory());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("catalogue"));
    }

    #[test]
    fn thermal_field_on_shell_formulation_only_warns() {
        let mut model = assignment("Deck", Topology::Surface, "DKT");
        model.field = PhysicsField::Thermal;
        let report = validate_models(&[model], &inventory());
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("THERMIQUE"));
    }

    #[test]
    fn topology_disagreement_with_inventory_warns() {
        let models = vec![assignment("Piers", Topology::Surface, "DKT")];
        let report = validate_models(&models, &inventory());
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("3D"));
    }

    #[test]
    fn section_shape_must_match_category() {
        let mut model = assignment("Piers", Topology::Volume, "3D");
        model.section = Some(SectionSpec::Shell {
            thickness: 5.0,
            offset: 0.0,
            vector: [1.0, 0.0, 0.0],
        });
        let report = validate_models(&[model], &inventory());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("2D section data on a 3D assignment"));
    }

    #[test]
    fn non_positive_section_dimension_warns() {
        let mut model = assignment("Deck", Topology::Surface, "DKT");
        model.section = Some(SectionSpec::Shell {
            thickness: 0.0,
            offset: 0.0,
            vector: [1.0, 0.0, 0.0],
        });
        let report = validate_models(&[model], &inventory());
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("not positive"));
    }
}
