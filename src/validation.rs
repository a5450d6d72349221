//! Input validation for process sets.
//!
//! Checks the structural integrity of a process set before simulation.
//! Detects:
//! - Duplicate process names (the merge rule keys slices by name)
//! - Zero, negative or non-finite burst times
//! - Negative or non-finite arrival times
//! - Processes using the reserved idle name
//! - Bursts too long to step through at a given time unit
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, IDLE_NAME};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Two processes share the same name.
    DuplicateIdentity {
        /// The repeated name.
        name: String,
    },

    /// Burst time is zero, negative, or not a finite number.
    InvalidBurstTime {
        /// Offending process.
        name: String,
        /// The rejected burst time.
        burst: f64,
    },

    /// Arrival time is negative or not a finite number.
    InvalidArrivalTime {
        /// Offending process.
        name: String,
        /// The rejected arrival time.
        arrival: f64,
    },

    /// A process is named like the idle marker.
    ReservedName {
        /// The reserved name.
        name: String,
    },

    /// Stepping the burst one time unit at a time would exceed
    /// [`MAX_STEPS`].
    TooManySteps {
        /// Offending process.
        name: String,
        /// The burst time.
        burst: f64,
        /// The requested time unit.
        time_unit: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIdentity { name } => write!(f, "duplicate process name '{name}'"),
            Self::InvalidBurstTime { name, burst } => {
                write!(f, "process '{name}' has invalid burst time {burst}")
            }
            Self::InvalidArrivalTime { name, arrival } => {
                write!(f, "process '{name}' has invalid arrival time {arrival}")
            }
            Self::ReservedName { name } => {
                write!(f, "process name '{name}' is reserved for idle gaps")
            }
            Self::TooManySteps {
                name,
                burst,
                time_unit,
            } => write!(
                f,
                "process '{name}' needs more than {MAX_STEPS} steps (burst {burst}, time unit {time_unit})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Largest number of time-unit steps a single burst may take.
///
/// Past 2^53 units, subtracting one unit from the remaining burst no longer
/// changes it in `f64`.
pub const MAX_STEPS: f64 = 9_007_199_254_740_992.0;

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate names
/// 2. No process named `IDLE`
/// 3. Every burst time is finite and strictly positive
/// 4. Every arrival time is finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for p in processes {
        if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::DuplicateIdentity {
                name: p.name.clone(),
            });
        }

        if p.name == IDLE_NAME {
            errors.push(ValidationError::ReservedName {
                name: p.name.clone(),
            });
        }

        if !p.burst_time.is_finite() || p.burst_time <= 0.0 {
            errors.push(ValidationError::InvalidBurstTime {
                name: p.name.clone(),
                burst: p.burst_time,
            });
        }

        if !p.arrival_time.is_finite() || p.arrival_time < 0.0 {
            errors.push(ValidationError::InvalidArrivalTime {
                name: p.name.clone(),
                arrival: p.arrival_time,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that every burst can be stepped through at `time_unit`.
///
/// Only preemptive runs step; a `time_unit` that is not finite and
/// positive is left to [`crate::SimulationConfig::validate`].
pub fn validate_step_count(processes: &[Process], time_unit: f64) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| p.burst_time / time_unit > MAX_STEPS)
        .map(|p| ValidationError::TooManySteps {
            name: p.name.clone(),
            burst: p.burst_time,
            time_unit,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
