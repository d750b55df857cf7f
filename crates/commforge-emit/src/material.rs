//! Material definition and assignment commands.

use crate::block::{Command, Factor, Section, Value};
use crate::context::NameTable;
use commforge_core::catalog::keys;
use commforge_core::numeric::coerce;
use commforge_core::{MaterialAssignment, MaterialDefinition, Symbol};
use indexmap::IndexSet;

/// Build the material section: one `DEFI_MATERIAU` per unique sanitized
/// material name (first occurrence wins — duplicates were rejected
/// upstream) and one combined `AFFE_MATERIAU` listing, per material, the
/// full set of assigned groups.
pub fn build_material_section(
    materials: &[MaterialDefinition],
    assignments: &[MaterialAssignment],
    names: &NameTable,
    final_mesh: &Symbol,
    model_result: &Symbol,
    field_result: &Symbol,
) -> Section {
    let mut section = Section::new("Materials");
    let mut defined: IndexSet<Symbol> = IndexSet::new();

    for material in materials {
        let Some(symbol) = names.material(&material.name) else {
            continue;
        };
        if !defined.insert(symbol.clone()) {
            continue;
        }
        let mut elas = Factor::new();
        for key in keys::REQUIRED_PROPERTIES {
            let value = material.properties.get(key).map_or(0.0, |raw| coerce(raw));
            elas = elas.arg(key, Value::Real(value));
        }
        if let Some(raw) = material.properties.get(keys::ALPHA) {
            elas = elas.arg(keys::ALPHA, Value::Real(coerce(raw)));
        }
        section.push(
            Command::assign(symbol.clone(), "DEFI_MATERIAU").arg("ELAS", Value::Factor(elas)),
        );
    }

    let mut affe: Vec<Factor> = Vec::new();
    for material in materials {
        let Some(symbol) = names.material(&material.name) else {
            continue;
        };
        let groups: Vec<Value> = assignments
            .iter()
            .filter(|a| a.material.trim().eq_ignore_ascii_case(material.name.trim()))
            .flat_map(|a| a.groups.iter())
            .map(|g| Value::text(g))
            .collect();
        if groups.is_empty() {
            continue;
        }
        affe.push(
            Factor::new()
                .arg("GROUP_MA", Value::Tuple(groups))
                .arg("MATER", Value::Ref(symbol.clone())),
        );
    }
    if !affe.is_empty() {
        section.push(
            Command::assign(field_result.clone(), "AFFE_MATERIAU")
                .arg("MAILLAGE", Value::Ref(final_mesh.clone()))
                .arg("MODELE", Value::Ref(model_result.clone()))
                .arg("AFFE", Value::Factors(affe)),
        );
    }

    section
}

/// Whether any material ends up assigned — and therefore whether a
/// material field concept exists for downstream commands.
pub fn has_material_field(assignments: &[MaterialAssignment]) -> bool {
    assignments.iter().any(|a| !a.groups.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commforge_core::symbol::sanitize;
    use commforge_core::{EntityId, ProjectState};
    use indexmap::IndexMap;

    fn material(name: &str, e: &str, nu: &str, rho: &str) -> MaterialDefinition {
        let mut properties: IndexMap<String, String> = IndexMap::new();
        properties.insert("E".to_string(), e.to_string());
        properties.insert("NU".to_string(), nu.to_string());
        properties.insert("RHO".to_string(), rho.to_string());
        MaterialDefinition {
            id: EntityId(0),
            name: name.to_string(),
            properties,
        }
    }

    fn build(
        materials: Vec<MaterialDefinition>,
        assignments: Vec<MaterialAssignment>,
    ) -> Section {
        let project = ProjectState {
            materials: materials.clone(),
            material_assignments: assignments.clone(),
            ..ProjectState::default()
        };
        let names = NameTable::resolve(&project, &[]);
        build_material_section(
            &materials,
            &assignments,
            &names,
            &sanitize("MAIL"),
            &sanitize("MODELE"),
            &sanitize("CHMAT"),
        )
    }

    #[test]
    fn definition_coerces_free_text_properties() {
        let section = build(vec![material("Steel", "210000", "0,3", "abc")], vec![]);
        let text = &section.blocks[0].text;
        assert!(text.starts_with("M_STEEL = DEFI_MATERIAU("), "{text}");
        assert!(text.contains("E=210000.0"), "{text}");
        assert!(text.contains("NU=0.3"), "{text}");
        assert!(text.contains("RHO=0.0"), "{text}");
    }

    #[test]
    fn optional_alpha_is_emitted_when_present() {
        let mut with_alpha = material("Steel", "210000", "0.3", "7.8e-9");
        with_alpha
            .properties
            .insert("ALPHA".to_string(), "1.2e-5".to_string());
        let section = build(vec![with_alpha], vec![]);
        assert!(section.blocks[0].text.contains("ALPHA=0.000012"));
    }

    #[test]
    fn assignment_lists_full_group_tuple_per_material() {
        let section = build(
            vec![material("Steel", "210000", "0.3", "7.8e-9")],
            vec![
                MaterialAssignment {
                    material: "Steel".to_string(),
                    groups: vec!["G1".to_string()],
                },
                MaterialAssignment {
                    material: "steel".to_string(),
                    groups: vec!["G2".to_string()],
                },
            ],
        );
        assert_eq!(section.blocks.len(), 2);
        let text = &section.blocks[1].text;
        assert!(text.starts_with("CHMAT = AFFE_MATERIAU("), "{text}");
        assert!(text.contains("GROUP_MA=('G1', 'G2')"), "{text}");
        assert!(text.contains("MATER=M_STEEL"), "{text}");
    }

    #[test]
    fn unassigned_materials_define_but_do_not_assign() {
        let section = build(vec![material("Steel", "1", "0.3", "1")], vec![]);
        assert_eq!(section.blocks.len(), 1);
        assert!(!has_material_field(&[]));
    }
}
