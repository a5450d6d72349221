//! Process model.
//!
//! A process is the atomic unit of schedulable work: a name, the time it
//! becomes eligible, and the CPU time it needs.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Times are abstract simulation units relative to t=0. They are real
/// numbers; the preemptive modes advance the clock in whole time units and
/// consume a fractional remainder in one final step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name. Also the final tie-break key.
    pub name: String,
    /// Time at which the process becomes eligible.
    pub arrival_time: f64,
    /// Total CPU time required.
    pub burst_time: f64,
    /// Scheduling priority (higher = more important).
    pub priority: i32,
    /// Time at which the process finished. `None` = not finished.
    pub completion_time: Option<f64>,
}

impl Process {
    /// Creates a process that arrives at t=0.
    pub fn new(name: impl Into<String>, burst_time: f64) -> Self {
        Self {
            name: name.into(),
            arrival_time: 0.0,
            burst_time,
            priority: 0,
            completion_time: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether a completion time has been stamped.
    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Completion minus arrival. `None` until finished.
    pub fn turnaround_time(&self) -> Option<f64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst. `None` until finished.
    pub fn waiting_time(&self) -> Option<f64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }
}
