//! Simulation errors.

use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// `do_algorithm` was called before `set_data`.
    UninitializedInput,
    /// The process set failed validation. Every detected problem is listed.
    InvalidInput(Vec<ValidationError>),
    /// Preemptive mode was requested for a discipline that cannot preempt.
    PreemptionUnsupported {
        /// Display name of the discipline.
        algorithm: &'static str,
    },
    /// The stepping unit must be finite and positive.
    InvalidTimeUnit(f64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UninitializedInput => {
                write!(f, "no process set supplied; call set_data before simulating")
            }
            Self::InvalidInput(errors) => {
                write!(f, "invalid process set ({} problem(s)): ", errors.len())?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::PreemptionUnsupported { algorithm } => {
                write!(f, "{algorithm} cannot be run in preemptive mode")
            }
            Self::InvalidTimeUnit(unit) => {
                write!(f, "time unit must be finite and positive, got {unit}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
