//! Study configuration and its validation.

use commforge_core::symbol::{sanitize, Symbol};
use commforge_validate::DEFAULT_UNIT_WINDOW;
use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

/// Fixed result concepts and policies for one study generation.
///
/// The defaults reproduce the conventional study layout; overriding a
/// result name is only needed when embedding the generated script into a
/// larger hand-written one.
#[derive(Clone, Debug)]
pub struct StudyConfig {
    /// Result concept of the assembled mesh. Default: `MAIL`.
    pub mesh_result: String,
    /// Result concept of the model assignment. Default: `MODELE`.
    pub model_result: String,
    /// Result concept of the material field. Default: `CHMAT`.
    pub field_result: String,
    /// Result concept of the element characteristics. Default: `CARA`.
    pub cara_result: String,
    /// Conventional unit-slot allocation window for mesh reads.
    pub unit_window: RangeInclusive<u32>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            mesh_result: "MAIL".to_string(),
            model_result: "MODELE".to_string(),
            field_result: "CHMAT".to_string(),
            cara_result: "CARA".to_string(),
            unit_window: DEFAULT_UNIT_WINDOW,
        }
    }
}

impl StudyConfig {
    /// Validate structural invariants: every result name must already be
    /// a canonical symbol, the four names must be distinct, and the unit
    /// window must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, &str); 4] = [
            ("mesh_result", &self.mesh_result),
            ("model_result", &self.model_result),
            ("field_result", &self.field_result),
            ("cara_result", &self.cara_result),
        ];
        for (field, value) in fields {
            if sanitize(value).as_str() != value {
                return Err(ConfigError::IllegalResultName {
                    field,
                    value: value.to_string(),
                });
            }
        }
        for (i, (_, a)) in fields.iter().enumerate() {
            for (_, b) in fields.iter().skip(i + 1) {
                if a == b {
                    return Err(ConfigError::DuplicateResultName {
                        value: (*a).to_string(),
                    });
                }
            }
        }
        if self.unit_window.is_empty() {
            return Err(ConfigError::EmptyUnitWindow {
                start: *self.unit_window.start(),
                end: *self.unit_window.end(),
            });
        }
        Ok(())
    }

    /// The four reserved result symbols, in allocation order.
    ///
    /// Only meaningful after [`validate`](Self::validate) — each name is
    /// then already canonical, so sanitization is the identity.
    pub fn reserved_symbols(&self) -> [Symbol; 4] {
        [
            sanitize(&self.mesh_result),
            sanitize(&self.model_result),
            sanitize(&self.field_result),
            sanitize(&self.cara_result),
        ]
    }
}

/// Errors detected during [`StudyConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A result name is not a canonical symbol.
    IllegalResultName {
        /// Which config field holds the offending value.
        field: &'static str,
        /// The offending value.
        value: String,
    },
    /// Two result concepts share a name.
    DuplicateResultName {
        /// The shared name.
        value: String,
    },
    /// The unit window contains no slots.
    EmptyUnitWindow {
        /// Configured window start.
        start: u32,
        /// Configured window end.
        end: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalResultName { field, value } => {
                write!(f, "{field} '{value}' is not a canonical symbol")
            }
            Self::DuplicateResultName { value } => {
                write!(f, "result concept '{value}' is used twice")
            }
            Self::EmptyUnitWindow { start, end } => {
                write!(f, "unit window {start}..={end} contains no slots")
            }
        }
    }
}

impl Error for ConfigError {}
