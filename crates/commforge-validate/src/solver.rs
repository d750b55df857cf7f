//! Solver settings validation.
//!
//! Everything here is advisory: unusual tuning emits fine, it just
//! tends to be a typo. Absence of settings is handled upstream by
//! injecting the defaults, so this validator always receives a value.

use commforge_core::{SolverSettings, ValidationReport};

/// Validate solver tuning parameters. Warnings only.
pub fn validate_solver(settings: &SolverSettings) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !settings.resi_rela.is_finite() || settings.resi_rela <= 0.0 {
        report.warning(format!(
            "solver: relative residual tolerance {} is not positive",
            settings.resi_rela
        ));
    }
    if !settings.pcent_pivot.is_finite()
        || settings.pcent_pivot < 0.0
        || settings.pcent_pivot > 100.0
    {
        report.warning(format!(
            "solver: pivot percentage {} is outside [0, 100]",
            settings.pcent_pivot
        ));
    }
    if !SolverSettings::KNOWN_METHODS.contains(&settings.method.as_str()) {
        report.warning(format!(
            "solver: unknown method '{}' (expected one of {})",
            settings.method,
            SolverSettings::KNOWN_METHODS.join(", ")
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_clean() {
        let report = validate_solver(&SolverSettings::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn non_positive_tolerance_warns() {
        let settings = SolverSettings {
            resi_rela: 0.0,
            ..SolverSettings::default()
        };
        let report = validate_solver(&settings);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn out_of_range_pivot_warns() {
        let settings = SolverSettings {
            pcent_pivot: 150.0,
            ..SolverSettings::default()
        };
        let report = validate_solver(&settings);
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("outside [0, 100]"));
    }

    #[test]
    fn unknown_method_warns() {
        let settings = SolverSettings {
            method: "GAUSS".to_string(),
            ..SolverSettings::default()
        };
        let report = validate_solver(&settings);
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("GAUSS"));
    }
}
