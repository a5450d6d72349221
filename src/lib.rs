//! CPU-scheduling simulation producing Gantt timelines.
//!
//! Turns a set of `(arrival, burst, priority)` processes into an ordered
//! sequence of execution slices with idle gaps and completion times, under
//! a chosen discipline and combination of the two policy flags
//! (arrival-time awareness, preemption).
//!
//! # Modules
//!
//! - **`models`**: `Process`, `Slice`, `Timeline`, `ProcessGenerator`
//! - **`dispatching`**: `SelectionRule` trait, built-in rules, `ReadyQueue`
//! - **`simulation`**: Shared time-stepping core and `SimulationKpi`
//! - **`algorithms`**: `Algorithm` capability contract and the `Discipline` family
//! - **`validation`**: Input integrity checks (duplicate names, bad bursts)
//!
//! # Example
//!
//! ```
//! use u_gantt::{Algorithm, Discipline, Process};
//!
//! let mut ljf = Discipline::LongestJobFirst.build();
//! ljf.set_data(vec![
//!     Process::new("A", 10.0),
//!     Process::new("B", 5.0),
//! ]);
//! let timeline = ljf.do_algorithm(false).unwrap();
//! assert_eq!(timeline.slices[0].name, "A");
//! assert_eq!(timeline.completion_time_of("B"), Some(15.0));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod simulation;
pub mod validation;

pub use algorithms::{Algorithm, Discipline, Simulator};
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use models::{Process, Slice, Timeline};
pub use simulation::SimulationKpi;
