//! Material definition and assignment validation.
//!
//! Property values are deliberately not range-validated: they are free
//! numeric text coerced at emission time, so a half-typed modulus never
//! blocks editing. Structural validation targets names and group claims.

use crate::label;
use commforge_core::catalog::keys;
use commforge_core::{MaterialAssignment, MaterialDefinition, ValidationReport};
use indexmap::IndexMap;

/// Validate material definitions and their group assignments.
///
/// Errors: empty or case-insensitively duplicated display names, missing
/// required property keys, assignments referencing unknown materials, a
/// group claimed by two assignments (the message names both materials).
/// Warnings: an assignment listing no groups.
pub fn validate_materials(
    materials: &[MaterialDefinition],
    assignments: &[MaterialAssignment],
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut seen_names: IndexMap<String, &str> = IndexMap::new();
    for (index, material) in materials.iter().enumerate() {
        let who = label("material", index, &material.name);

        let trimmed = material.name.trim();
        if trimmed.is_empty() {
            report.error(format!("{who}: display name is empty"));
        } else {
            let folded = trimmed.to_lowercase();
            if let Some(previous) = seen_names.insert(folded, trimmed) {
                report.error(format!(
                    "{who}: display name duplicates material '{previous}'"
                ));
            }
        }

        for required in keys::REQUIRED_PROPERTIES {
            if !material.properties.contains_key(required) {
                report.error(format!("{who}: property {required} is missing"));
            }
        }
    }

    // Group-claim conflicts span the whole assignment set: a group may
    // belong to exactly one material. Group references are compared
    // case-sensitively — they come from the mesh file verbatim.
    let mut claimed: IndexMap<&str, &str> = IndexMap::new();
    for (index, assignment) in assignments.iter().enumerate() {
        let who = label("material assignment", index, &assignment.material);

        let known = materials
            .iter()
            .any(|m| m.name.trim().eq_ignore_ascii_case(assignment.material.trim()));
        if !known {
            report.error(format!(
                "{who}: material '{}' is not defined",
                assignment.material
            ));
        }

        if assignment.groups.is_empty() {
            report.warning(format!("{who}: no groups assigned"));
        }

        for group in &assignment.groups {
            if let Some(previous) = claimed.insert(group.as_str(), assignment.material.as_str()) {
                report.error(format!(
                    "group '{group}' is assigned to both material '{previous}' and material '{}'",
                    assignment.material
                ));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use commforge_core::EntityId;
    use indexmap::IndexMap as Map;

    fn material(name: &str) -> MaterialDefinition {
        let mut properties: Map<String, String> = Map::new();
        properties.insert("E".to_string(), "210000".to_string());
        properties.insert("NU".to_string(), "0.3".to_string());
        properties.insert("RHO".to_string(), "7.8e-9".to_string());
        MaterialDefinition {
            id: EntityId(0),
            name: name.to_string(),
            properties,
        }
    }

    fn assign(material: &str, groups: &[&str]) -> MaterialAssignment {
        MaterialAssignment {
            material: material.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn valid_set_passes() {
        let materials = vec![material("Steel"), material("Concrete")];
        let assignments = vec![assign("Steel", &["G1"]), assign("Concrete", &["G2"])];
        let report = validate_materials(&materials, &assignments);
        assert!(report.is_valid(), "{report}");
    }

    #[test]
    fn display_name_uniqueness_is_case_insensitive() {
        let materials = vec![material("Steel"), material("STEEL")];
        let report = validate_materials(&materials, &[]);
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("duplicates material 'Steel'"));
    }

    #[test]
    fn missing_required_property_is_an_error() {
        let mut incomplete = material("Steel");
        incomplete.properties.shift_remove("RHO");
        let report = validate_materials(&[incomplete], &[]);
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("property RHO is missing"));
    }

    #[test]
    fn unparsable_property_text_is_not_validated() {
        // Range/parse validation is disabled on purpose: coercion happens
        // at emission, and provisional text must not block editing.
        let mut provisional = material("Steel");
        provisional
            .properties
            .insert("E".to_string(), "pending".to_string());
        let report = validate_materials(&[provisional], &[]);
        assert!(report.is_valid());
    }

    #[test]
    fn group_conflict_names_both_materials() {
        let materials = vec![material("Steel"), material("Concrete")];
        let assignments = vec![assign("Steel", &["G1"]), assign("Concrete", &["G1"])];
        let report = validate_materials(&materials, &assignments);
        assert!(!report.is_valid());
        let message = &report.errors[0];
        assert!(message.contains("'Steel'"), "{message}");
        assert!(message.contains("'Concrete'"), "{message}");
        assert!(message.contains("'G1'"), "{message}");
    }

    #[test]
    fn group_conflict_is_case_sensitive() {
        let materials = vec![material("Steel"), material("Concrete")];
        let assignments = vec![assign("Steel", &["G1"]), assign("Concrete", &["g1"])];
        let report = validate_materials(&materials, &assignments);
        assert!(report.is_valid());
    }

    #[test]
    fn unknown_material_reference_is_an_error() {
        let report = validate_materials(&[material("Steel")], &[assign("Bronze", &["G1"])]);
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("'Bronze' is not defined"));
    }

    #[test]
    fn empty_assignment_warns() {
        let report = validate_materials(&[material("Steel")], &[assign("Steel", &[])]);
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("no groups"));
    }
}
