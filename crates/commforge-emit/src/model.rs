//! Model assignment and element-characteristics commands.

use crate::block::{Command, Factor, Section, Value};
use commforge_core::{ModelAssignment, SectionSpec, Symbol};

/// Build the model section: one `AFFE_MODELE` carrying an `AFFE` factor
/// per assignment in input order, plus one `AFFE_CARA_ELEM` when any
/// assignment carries section data.
pub fn build_model_section(
    models: &[ModelAssignment],
    final_mesh: &Symbol,
    model_result: &Symbol,
    cara_result: &Symbol,
) -> Section {
    let mut section = Section::new("Model");
    if models.is_empty() {
        return section;
    }

    let affe: Vec<Factor> = models
        .iter()
        .map(|model| {
            Factor::new()
                .arg("GROUP_MA", Value::text(model.group.clone()))
                .arg("PHENOMENE", Value::text(model.field.phenomene()))
                .arg("MODELISATION", Value::text(model.formulation.clone()))
        })
        .collect();
    section.push(
        Command::assign(model_result.clone(), "AFFE_MODELE")
            .arg("MAILLAGE", Value::Ref(final_mesh.clone()))
            .arg("AFFE", Value::Factors(affe)),
    );

    let mut shells: Vec<Factor> = Vec::new();
    let mut beams: Vec<Factor> = Vec::new();
    for model in models {
        match &model.section {
            Some(SectionSpec::Shell {
                thickness,
                offset,
                vector,
            }) => {
                shells.push(
                    Factor::new()
                        .arg("GROUP_MA", Value::text(model.group.clone()))
                        .arg("EPAIS", Value::Real(*thickness))
                        .arg("EXCENTREMENT", Value::Real(*offset))
                        .arg(
                            "VECTEUR",
                            Value::Tuple(vector.iter().map(|v| Value::Real(*v)).collect()),
                        ),
                );
            }
            Some(SectionSpec::BeamRectangle { hy, hz }) => {
                beams.push(beam_factor(
                    &model.group,
                    "RECTANGLE",
                    vec![Value::text("HY"), Value::text("HZ")],
                    vec![Value::Real(*hy), Value::Real(*hz)],
                ));
            }
            Some(SectionSpec::BeamCircle { r }) => {
                beams.push(beam_factor(
                    &model.group,
                    "CERCLE",
                    vec![Value::text("R")],
                    vec![Value::Real(*r)],
                ));
            }
            None => {}
        }
    }

    if !shells.is_empty() || !beams.is_empty() {
        let mut command = Command::assign(cara_result.clone(), "AFFE_CARA_ELEM")
            .arg("MODELE", Value::Ref(model_result.clone()));
        if !shells.is_empty() {
            command = command.arg("COQUE", Value::Factors(shells));
        }
        if !beams.is_empty() {
            command = command.arg("POUTRE", Value::Factors(beams));
        }
        section.push(command);
    }

    section
}

/// Whether any assignment carries section data — and therefore whether
/// an element-characteristics concept exists for downstream commands.
pub fn has_element_characteristics(models: &[ModelAssignment]) -> bool {
    models.iter().any(|m| m.section.is_some())
}

fn beam_factor(group: &str, section: &str, cara: Vec<Value>, vale: Vec<Value>) -> Factor {
    Factor::new()
        .arg("GROUP_MA", Value::text(group))
        .arg("SECTION", Value::text(section))
        .arg("CARA", Value::Tuple(cara))
        .arg("VALE", Value::Tuple(vale))
}
