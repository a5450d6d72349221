//! Built-in selection rules.
//!
//! | Rule | Selects | Preemptive mode |
//! |------|---------|-----------------|
//! | `Ljf` | largest remaining burst | longest remaining time first |
//! | `Sjf` | smallest remaining burst | shortest remaining time first |
//! | `Fcfs` | earliest arrival | none |
//! | `HighestPriority` | largest `priority` | preempt on higher-priority arrival |
//!
//! # Score Convention
//! All rules return lower scores for candidates that should run first.

use super::{Candidate, RuleScore, SelectionRule};

/// Longest Job First.
///
/// Selects the eligible candidate with the most remaining work. In
/// preemptive mode the running process yields as soon as another
/// candidate has strictly more remaining burst, so long jobs level out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ljf;

impl SelectionRule for Ljf {
    fn name(&self) -> &'static str {
        "Longest Job First"
    }

    fn score(&self, candidate: &Candidate<'_>) -> RuleScore {
        -candidate.remaining
    }

    fn can_be_preemptive(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "This algorithm takes the longest job available and executes it first."
    }
}

/// Shortest Job First.
///
/// Selects the eligible candidate with the least remaining work.
/// Minimizes mean waiting time among non-preemptive orderings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SelectionRule for Sjf {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn score(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.remaining
    }

    fn can_be_preemptive(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "This algorithm takes the shortest job available and executes it first."
    }
}

/// First Come First Served.
///
/// Runs candidates in arrival order. Never preempts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SelectionRule for Fcfs {
    fn name(&self) -> &'static str {
        "First Come First Served"
    }

    fn score(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.arrival_time
    }

    fn can_be_preemptive(&self) -> bool {
        false
    }

    fn description(&self) -> &'static str {
        "This algorithm executes jobs in the order they arrive."
    }
}

/// Priority scheduling.
///
/// Selects the candidate with the highest `priority` value. The score does
/// not change while a process runs, so the preemptive mode only switches
/// when a more important process arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn score(&self, candidate: &Candidate<'_>) -> RuleScore {
        -f64::from(candidate.priority)
    }

    fn can_be_preemptive(&self) -> bool {
        true
    }

    fn considers_priority(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "This algorithm executes the job with the highest priority first."
    }
}
