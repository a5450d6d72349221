//! Timeline (Gantt sequence) model.
//!
//! A timeline is the ordered sequence of execution slices produced by one
//! simulation run, idle gaps included. Adjacent pieces of the same process
//! are coalesced on insertion so each contiguous run shows as one bar.

use serde::{Deserialize, Serialize};

use super::Process;

/// Name carried by slices that represent idle gaps.
pub const IDLE_NAME: &str = "IDLE";

/// One contiguous segment of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Owning process name, or [`IDLE_NAME`].
    pub name: String,
    /// Simulation time the segment starts at.
    pub start: f64,
    /// Length of the segment.
    pub duration: f64,
    /// Set only on the slice that concludes its process.
    pub completion_time: Option<f64>,
}

impl Slice {
    /// Creates a process slice.
    pub fn new(name: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            name: name.into(),
            start,
            duration,
            completion_time: None,
        }
    }

    /// Creates an idle gap.
    pub fn idle(start: f64, duration: f64) -> Self {
        Self::new(IDLE_NAME, start, duration)
    }

    /// Marks this slice as the one that finishes its process.
    pub fn completing_at(mut self, completion_time: f64) -> Self {
        self.completion_time = Some(completion_time);
        self
    }

    /// End time (start + duration).
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether this is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.name == IDLE_NAME
    }
}

/// Ordered slice sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in execution order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the last one if both belong to the
    /// same process.
    ///
    /// A merged slice adopts the incoming completion time when there is one.
    pub fn push(&mut self, slice: Slice) {
        if let Some(last) = self.slices.last_mut() {
            if !slice.is_idle() && last.name == slice.name {
                last.duration += slice.duration;
                if slice.completion_time.is_some() {
                    last.completion_time = slice.completion_time;
                }
                return;
            }
        }
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterates over the slices in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    /// Consumes the timeline, returning the raw slices.
    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }

    /// End time of the last slice.
    pub fn makespan(&self) -> f64 {
        self.slices.last().map(Slice::end).unwrap_or(0.0)
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> f64 {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// Total time spent idle.
    pub fn idle_time(&self) -> f64 {
        self.slices
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// All slices belonging to a process.
    pub fn slices_for(&self, name: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.name == name).collect()
    }

    /// Total CPU time a process received.
    pub fn service_time_of(&self, name: &str) -> f64 {
        self.slices_for(name).iter().map(|s| s.duration).sum()
    }

    /// Completion time stamped for a process, if it finished.
    pub fn completion_time_of(&self, name: &str) -> Option<f64> {
        self.slices
            .iter()
            .rev()
            .filter(|s| s.name == name)
            .find_map(|s| s.completion_time)
    }

    /// Copies of `processes` with completion times stamped from this
    /// timeline. Processes that never finished keep `None`.
    pub fn stamp_completions(&self, processes: &[Process]) -> Vec<Process> {
        processes
            .iter()
            .map(|p| Process {
                completion_time: self.completion_time_of(&p.name),
                ..p.clone()
            })
            .collect()
    }

    /// Time a process first ran.
    pub fn first_start_of(&self, name: &str) -> Option<f64> {
        self.slices.iter().find(|s| s.name == name).map(|s| s.start)
    }

    /// Whether every slice starts exactly where the previous one ended,
    /// the first one at t=0.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0.0;
        for s in &self.slices {
            if (s.start - cursor).abs() > 1e-9 {
                return false;
            }
            cursor = s.end();
        }
        true
    }
}

impl IntoIterator for Timeline {
    type Item = Slice;
    type IntoIter = std::vec::IntoIter<Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
