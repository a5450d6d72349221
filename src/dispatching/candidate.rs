//! Candidate view passed to selection rules.

use crate::models::Process;

/// An eligible process as seen by a selection rule.
///
/// `remaining` is the burst still owed; it equals `burst_time` until the
/// process first runs and shrinks as preemptive modes consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Process name.
    pub name: &'a str,
    /// Arrival time used for eligibility and tie-breaking.
    pub arrival_time: f64,
    /// Original burst time.
    pub burst_time: f64,
    /// Burst time still to run.
    pub remaining: f64,
    /// Scheduling priority (higher = more important).
    pub priority: i32,
}

impl<'a> Candidate<'a> {
    /// Views a process with its full burst still owed.
    pub fn from_process(process: &'a Process) -> Self {
        Self {
            name: &process.name,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining: process.burst_time,
            priority: process.priority,
        }
    }

    /// Sets the remaining burst.
    pub fn with_remaining(mut self, remaining: f64) -> Self {
        self.remaining = remaining;
        self
    }
}
