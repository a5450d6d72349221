//! Simulation domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: one schedulable unit of work |
//! | `Slice` | Output: one contiguous run of a process, or an idle gap |
//! | `Timeline` | Output: the ordered slice sequence (Gantt chart rows) |
//! | `ProcessGenerator` | Seeded synthetic process sets |

mod generator;
mod process;
mod timeline;

pub use generator::ProcessGenerator;
pub use process::Process;
pub use timeline::{Slice, Timeline, IDLE_NAME};
