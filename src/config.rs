//! Simulation settings.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Flags and units for one simulation run.
///
/// Serializable so hosts can persist the settings they present to users.
///
/// # Example
/// ```
/// use u_gantt::SimulationConfig;
///
/// let config = SimulationConfig::new()
///     .with_arrival_time(false)
///     .with_preemptive(true);
/// assert!(config.preemptive);
/// assert_eq!(config.time_unit, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gate eligibility on arrival time. When false every process is
    /// treated as arriving at t=0.
    pub with_arrival_time: bool,
    /// Allow a running process to be interrupted.
    pub preemptive: bool,
    /// Clock advance per step in the preemptive modes.
    pub time_unit: f64,
}

impl SimulationConfig {
    /// Arrival-aware, non-preemptive, unit steps.
    pub fn new() -> Self {
        Self {
            with_arrival_time: true,
            preemptive: false,
            time_unit: 1.0,
        }
    }

    /// Sets arrival-time awareness.
    pub fn with_arrival_time(mut self, with_arrival_time: bool) -> Self {
        self.with_arrival_time = with_arrival_time;
        self
    }

    /// Sets preemption.
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Sets the stepping unit.
    pub fn with_time_unit(mut self, time_unit: f64) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Checks the time unit is finite and positive.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.time_unit.is_finite() && self.time_unit > 0.0 {
            Ok(())
        } else {
            Err(SimulationError::InvalidTimeUnit(self.time_unit))
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
