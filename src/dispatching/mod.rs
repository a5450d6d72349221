//! Selection rules and the ready queue.
//!
//! A discipline is defined entirely by how it scores an eligible
//! candidate. Everything else (eligibility, stepping, idle gaps, merging)
//! is shared and lives in [`crate::simulation`].
//!
//! # Usage
//!
//! ```
//! use u_gantt::dispatching::{rules, Candidate, SelectionRule};
//! use u_gantt::models::Process;
//!
//! let long = Process::new("long", 8.0);
//! let short = Process::new("short", 2.0);
//! let ljf = rules::Ljf;
//! assert!(
//!     ljf.score(&Candidate::from_process(&long)) < ljf.score(&Candidate::from_process(&short))
//! );
//! ```

mod candidate;
mod engine;
pub mod rules;

pub use candidate::Candidate;
pub use engine::{RankKey, ReadyQueue};
pub(crate) use engine::name_ranks;

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = f64;

/// The per-discipline selection predicate plus its capability metadata.
///
/// # Score Convention
/// **Lower score = runs first.** Ties on score are broken by earlier
/// arrival, then by ordinal-smaller name; rules never see ties.
///
/// A rule's score may depend on the candidate's remaining burst but not on
/// the clock, so a waiting candidate's score never goes stale.
pub trait SelectionRule: Send + Sync + Debug {
    /// Display name (e.g., "Longest Job First").
    fn name(&self) -> &'static str;

    /// Scores an eligible candidate.
    fn score(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Whether the discipline has an interrupting mode.
    fn can_be_preemptive(&self) -> bool;

    /// Whether `priority` participates in ordering.
    fn considers_priority(&self) -> bool {
        false
    }

    /// Whether a time quantum parameter is required.
    fn needs_quantum(&self) -> bool {
        false
    }

    /// One-line explanation for tooltips.
    fn description(&self) -> &'static str {
        self.name()
    }
}
