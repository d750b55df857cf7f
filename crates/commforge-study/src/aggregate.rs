//! Project aggregation: validate everything, then emit all-or-nothing.
//!
//! The aggregator is the only place that sees every entity family at
//! once. It merges all family validators with the cross-entity rules no
//! single validator can check (load-case references), and only if the
//! merged report is clean invokes the builders in dependency order —
//! mesh, model, material, restraint/load, excitation. A project with any
//! error yields no document at all: there are no partially-generated
//! scripts.

use crate::config::{ConfigError, StudyConfig};
use crate::document::StudyDocument;
use commforge_core::{ProjectState, ValidationReport};
use commforge_emit::{
    build_load_case_section, build_load_section, build_material_section, build_mesh_section,
    build_model_section, build_restraint_section, has_element_characteristics,
    has_material_field, NameTable, Section,
};
use commforge_validate::{
    validate_loads, validate_materials, validate_meshes, validate_models, validate_restraints,
    validate_solver,
};
use std::error::Error;
use std::fmt;

/// Why a generation attempt produced no document.
#[derive(Clone, Debug, PartialEq)]
pub enum StudyError {
    /// The study configuration itself is unusable.
    Config(ConfigError),
    /// The project failed validation; the merged report explains why.
    Invalid(ValidationReport),
}

impl fmt::Display for StudyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Invalid(report) => write!(f, "project invalid: {report}"),
        }
    }
}

impl Error for StudyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<ConfigError> for StudyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Run every family validator plus the cross-entity rules, returning the
/// merged report. Never panics; all failure is data.
pub fn validate_project(project: &ProjectState, config: &StudyConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.merge(validate_meshes(&project.meshes, &config.unit_window));
    report.merge(validate_models(&project.models, &project.groups));
    report.merge(validate_materials(
        &project.materials,
        &project.material_assignments,
    ));
    report.merge(validate_restraints(&project.restraints, &project.groups));
    report.merge(validate_loads(&project.loads, &project.groups));
    report.merge(validate_solver(&project.solver_settings()));
    report.merge(validate_cross_references(project));
    report
}

/// Cross-entity rules: every load-case reference must resolve to an
/// existing restraint or load name, a case must reference something, and
/// assignments need a mesh to hang off.
fn validate_cross_references(project: &ProjectState) -> ValidationReport {
    let mut report = ValidationReport::new();

    let needs_mesh = !project.models.is_empty()
        || !project.restraints.is_empty()
        || !project.loads.is_empty()
        || !project.load_cases.is_empty();
    if project.meshes.is_empty() && needs_mesh {
        report.error("project: assignments and excitations require at least one mesh source");
    }

    for (index, case) in project.load_cases.iter().enumerate() {
        let who = if case.name.trim().is_empty() {
            format!("load case [{index}]")
        } else {
            format!("load case '{}'", case.name.trim())
        };

        for name in &case.restraints {
            let known = project
                .restraints
                .iter()
                .any(|r| r.name.trim() == name.trim());
            if !known {
                report.error(format!("{who}: unknown restraint '{name}'"));
            }
        }
        for name in &case.loads {
            let known = project.loads.iter().any(|l| l.name.trim() == name.trim());
            if !known {
                report.error(format!("{who}: unknown load '{name}'"));
            }
        }
        if case.restraints.is_empty() && case.loads.is_empty() {
            report.error(format!("{who}: references no restraints or loads"));
        }
    }

    report
}

/// Generate the full study document, all-or-nothing.
///
/// On success the document carries every command section in dependency
/// order plus the validator warnings as advisory section notes. On
/// failure the union of all errors is returned and no builder runs.
pub fn generate(
    project: &ProjectState,
    config: &StudyConfig,
) -> Result<StudyDocument, StudyError> {
    config.validate()?;

    let report = validate_project(project, config);
    if !report.is_valid() {
        return Err(StudyError::Invalid(report));
    }

    let [mesh_result, model_result, field_result, cara_result] = config.reserved_symbols();
    let names = NameTable::resolve(project, &config.reserved_symbols());

    let (mesh_section, final_mesh) = build_mesh_section(&project.meshes, &names, &mesh_result);

    let mut sections: Vec<Section> = vec![mesh_section];
    if let Some(final_mesh) = &final_mesh {
        sections.push(build_model_section(
            &project.models,
            final_mesh,
            &model_result,
            &cara_result,
        ));
        sections.push(build_material_section(
            &project.materials,
            &project.material_assignments,
            &names,
            final_mesh,
            &model_result,
            &field_result,
        ));
    }
    sections.push(build_restraint_section(
        &project.restraints,
        &names,
        &model_result,
    ));
    sections.push(build_load_section(&project.loads, &names, &model_result));

    let field = has_material_field(&project.material_assignments).then_some(&field_result);
    let cara = has_element_characteristics(&project.models).then_some(&cara_result);
    sections.push(build_load_case_section(
        &project.load_cases,
        &names,
        &project.solver_settings(),
        &model_result,
        field,
        cara,
    ));

    route_warnings(&mut sections, &report.warnings);
    Ok(StudyDocument::assemble(sections))
}

/// Attach each warning to the section it concerns, keyed by the message
/// prefix the validators use. Unmatched warnings land on the first
/// non-empty section so nothing is silently dropped.
fn route_warnings(sections: &mut [Section], warnings: &[String]) {
    for warning in warnings {
        let title = if warning.starts_with("mesh") {
            "Meshes"
        } else if warning.starts_with("model assignment") {
            "Model"
        } else if warning.starts_with("material") {
            "Materials"
        } else if warning.starts_with("restraint") {
            "Restraints"
        } else if warning.starts_with("load case") || warning.starts_with("solver") {
            "Load cases"
        } else if warning.starts_with("load") {
            "Loads"
        } else {
            ""
        };
        let target = sections
            .iter()
            .position(|s| s.title == title && !s.is_empty())
            .or_else(|| sections.iter().position(|s| !s.is_empty()));
        if let Some(index) = target {
            sections[index].notes.push(warning.clone());
        }
    }
}
