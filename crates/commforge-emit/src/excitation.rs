//! Restraint, load, and load-case (solver invocation) commands.

use crate::block::{Command, Factor, Section, Value};
use crate::context::NameTable;
use commforge_core::catalog::{keys, DOF_EMISSION_ORDER};
use commforge_core::numeric::{coerce, is_free_marker};
use commforge_core::{Load, LoadCase, LoadKind, Restraint, SolverSettings, Symbol};
use smallvec::SmallVec;

/// Append the fixed verification tail every excitation command carries.
fn with_excitation_tail(command: Command) -> Command {
    command
        .arg("DOUBLE_LAGRANGE", Value::text("OUI"))
        .arg("INFO", Value::Int(1))
        .arg("VERI_AFFE", Value::text("OUI"))
        .arg("VERI_NORM", Value::text("OUI"))
}

/// Build the restraint section: one `AFFE_CHAR_MECA` with a `DDL_IMPO`
/// factor per restraint, components emitted in the fixed DOF order with
/// `"free"` components omitted.
pub fn build_restraint_section(
    restraints: &[Restraint],
    names: &NameTable,
    model_result: &Symbol,
) -> Section {
    let mut section = Section::new("Restraints");

    for restraint in restraints {
        let Some(symbol) = names.restraint(&restraint.name) else {
            continue;
        };

        let mut fixed: SmallVec<[(&'static str, f64); 6]> = SmallVec::new();
        for dof in DOF_EMISSION_ORDER {
            let value = restraint
                .components
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(dof.key()))
                .map(|(_, raw)| raw);
            if let Some(raw) = value {
                if !is_free_marker(raw) {
                    fixed.push((dof.key(), coerce(raw)));
                }
            }
        }

        let mut ddl = Factor::new().arg("GROUP_MA", Value::text(restraint.group.clone()));
        for (key, value) in fixed {
            ddl = ddl.arg(key, Value::Real(value));
        }

        section.push(with_excitation_tail(
            Command::assign(symbol.clone(), "AFFE_CHAR_MECA")
                .arg("MODELE", Value::Ref(model_result.clone()))
                .arg("DDL_IMPO", Value::Factor(ddl)),
        ));
    }

    section
}

/// Build the load section: one `AFFE_CHAR_MECA` per load, the operand
/// keyword and group addressing fixed by the load family.
pub fn build_load_section(loads: &[Load], names: &NameTable, model_result: &Symbol) -> Section {
    let mut section = Section::new("Loads");

    for load in loads {
        let Some(symbol) = names.load(&load.name) else {
            continue;
        };
        let factor = match load.kind {
            LoadKind::Gravity => gravity_factor(load),
            _ => component_factor(load),
        };
        section.push(with_excitation_tail(
            Command::assign(symbol.clone(), "AFFE_CHAR_MECA")
                .arg("MODELE", Value::Ref(model_result.clone()))
                .arg(load.kind.operand(), Value::Factor(factor)),
        ));
    }

    section
}

/// `PESANTEUR` factor: magnitude, direction tuple, optional group.
/// When no direction component is given, standard Earth gravity
/// direction `(0, 0, -1)` applies.
fn gravity_factor(load: &Load) -> Factor {
    let magnitude = parameter(load, keys::GRAVITE).unwrap_or(9.81);
    let dir = [
        parameter(load, keys::DIR_X),
        parameter(load, keys::DIR_Y),
        parameter(load, keys::DIR_Z),
    ];
    let direction: [f64; 3] = if dir.iter().all(Option::is_none) {
        [0.0, 0.0, -1.0]
    } else {
        [
            dir[0].unwrap_or(0.0),
            dir[1].unwrap_or(0.0),
            dir[2].unwrap_or(0.0),
        ]
    };

    let mut factor = Factor::new()
        .arg("GRAVITE", Value::Real(magnitude))
        .arg(
            "DIRECTION",
            Value::Tuple(direction.iter().map(|v| Value::Real(*v)).collect()),
        );
    if !load.group.trim().is_empty() {
        factor = factor.arg("GROUP_MA", Value::text(load.group.clone()));
    }
    factor
}

/// Component factor for force and pressure families: group addressing
/// first, then every present parameter in catalogue order.
fn component_factor(load: &Load) -> Factor {
    let mut factor =
        Factor::new().arg(load.kind.group_keyword(), Value::text(load.group.clone()));
    for key in load.kind.allowed_parameters() {
        if let Some(value) = parameter(load, key) {
            factor = factor.arg(*key, Value::Real(value));
        }
    }
    factor
}

/// Look up a load parameter case-insensitively, coerced.
fn parameter(load: &Load, key: &str) -> Option<f64> {
    load.parameters
        .iter()
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        .map(|(_, raw)| coerce(raw))
}

/// Build the load-case section: one `MECA_STATIQUE` per case, the
/// excitation tuple concatenating resolved restraints then loads, each
/// reference in its canonical form.
pub fn build_load_case_section(
    cases: &[LoadCase],
    names: &NameTable,
    solver: &SolverSettings,
    model_result: &Symbol,
    field_result: Option<&Symbol>,
    cara_result: Option<&Symbol>,
) -> Section {
    let mut section = Section::new("Load cases");

    for case in cases {
        let Some(result) = names.case(&case.name) else {
            continue;
        };

        let mut excit: Vec<Factor> = Vec::new();
        let restraint_refs = case.restraints.iter().filter_map(|n| names.restraint(n));
        let load_refs = case.loads.iter().filter_map(|n| names.load(n));
        for charge in restraint_refs.chain(load_refs) {
            excit.push(
                Factor::new()
                    .arg("CHARGE", Value::Ref(charge.clone()))
                    .arg("TYPE_CHARGE", Value::text("FIXE_CSTE")),
            );
        }

        let mut command = Command::assign(result.clone(), "MECA_STATIQUE")
            .arg("MODELE", Value::Ref(model_result.clone()));
        if let Some(field) = field_result {
            command = command.arg("CHAM_MATER", Value::Ref(field.clone()));
        }
        if let Some(cara) = cara_result {
            command = command.arg("CARA_ELEM", Value::Ref(cara.clone()));
        }
        command = command
            .arg("EXCIT", Value::Factors(excit))
            .arg("OPTION", Value::text("SIEF_ELGA"))
            .arg(
                "SOLVEUR",
                Value::Factor(
                    Factor::new()
                        .arg("METHODE", Value::text(solver.method.clone()))
                        .arg("RESI_RELA", Value::Real(solver.resi_rela))
                        .arg("PCENT_PIVOT", Value::Real(solver.pcent_pivot)),
                ),
            )
            .arg("INFO", Value::Int(1));
        section.push(command);
    }

    section
}
