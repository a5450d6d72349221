//! Time-stepping simulation core and KPI evaluation.
//!
//! # Modes
//!
//! | Arrival-aware | Preemptive | Entry point |
//! |---------------|------------|-------------|
//! | yes | yes | `run_stepped` |
//! | yes | no | `run_to_completion` |
//! | no | yes | `reset_arrivals` + `run_stepped` |
//! | no | no | `reset_arrivals` + `run_static` |
//!
//! `simulate` picks the row from a [`crate::SimulationConfig`]. All modes
//! take the rule that scores candidates, so one core serves every
//! discipline.

mod kpi;
mod stepper;


pub use kpi::{ProcessMetrics, SimulationKpi};
pub use stepper::{reset_arrivals, run_static, run_stepped, run_to_completion, simulate};
