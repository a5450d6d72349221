//! Simulation quality metrics (KPIs).
//!
//! Computes the standard CPU-scheduling indicators from a finished
//! timeline and the input process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last slice |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | finished processes / makespan |

use serde::{Deserialize, Serialize};

use super::reset_arrivals;
use crate::config::SimulationConfig;
use crate::models::{Process, Timeline};

/// Per-process timing figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process name.
    pub name: String,
    /// Completion time.
    pub completion_time: f64,
    /// completion - arrival.
    pub turnaround_time: f64,
    /// turnaround - burst.
    pub waiting_time: f64,
    /// first start - arrival.
    pub response_time: f64,
}

/// Aggregate indicators of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// End of the last slice.
    pub makespan: f64,
    /// Mean turnaround over finished processes.
    pub avg_turnaround_time: f64,
    /// Mean waiting over finished processes.
    pub avg_waiting_time: f64,
    /// Mean response over finished processes.
    pub avg_response_time: f64,
    /// Fraction of the makespan spent running processes (0.0..1.0).
    pub cpu_utilization: f64,
    /// Finished processes per time unit.
    pub throughput: f64,
    /// Figures for each finished process, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl SimulationKpi {
    /// Computes KPIs from a timeline, the processes it was built from, and
    /// the configuration of that run.
    ///
    /// When the run ignored arrival times every arrival counts as 0, the
    /// same as during simulation. Processes absent from the timeline are
    /// skipped.
    pub fn calculate(timeline: &Timeline, processes: &[Process], config: &SimulationConfig) -> Self {
        let mut simulated = processes.to_vec();
        if !config.with_arrival_time {
            reset_arrivals(&mut simulated);
        }

        let per_process: Vec<ProcessMetrics> = timeline
            .stamp_completions(&simulated)
            .into_iter()
            .filter_map(|p| {
                let response = timeline.first_start_of(&p.name)? - p.arrival_time;
                Some(ProcessMetrics {
                    completion_time: p.completion_time?,
                    turnaround_time: p.turnaround_time()?,
                    waiting_time: p.waiting_time()?,
                    response_time: response,
                    name: p.name,
                })
            })
            .collect();

        let makespan = timeline.makespan();
        let finished = per_process.len();

        let mean = |f: fn(&ProcessMetrics) -> f64| {
            if finished == 0 {
                0.0
            } else {
                per_process.iter().map(f).sum::<f64>() / finished as f64
            }
        };

        let (cpu_utilization, throughput) = if makespan > 0.0 {
            (
                timeline.busy_time() / makespan,
                finished as f64 / makespan,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            avg_turnaround_time: mean(|m| m.turnaround_time),
            avg_waiting_time: mean(|m| m.waiting_time),
            avg_response_time: mean(|m| m.response_time),
            cpu_utilization,
            throughput,
            per_process,
        }
    }

    /// Figures for one process.
    pub fn for_process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    fn sample() -> (Timeline, Vec<Process>) {
        let processes = vec![
            Process::new("A", 3.0).with_arrival(2.0),
            Process::new("B", 4.0).with_arrival(3.0),
        ];
        let mut t = Timeline::new();
        t.push(Slice::idle(0.0, 2.0));
        t.push(Slice::new("A", 2.0, 3.0).completing_at(5.0));
        t.push(Slice::new("B", 5.0, 4.0).completing_at(9.0));
        (t, processes)
    }

    #[test]
    fn test_per_process_figures() {
        let (t, processes) = sample();
        let kpi = SimulationKpi::calculate(&t, &processes, &SimulationConfig::new());

        let b = kpi.for_process("B").unwrap();
        assert_eq!(b.completion_time, 9.0);
        assert_eq!(b.turnaround_time, 6.0);
        assert_eq!(b.waiting_time, 2.0);
        assert_eq!(b.response_time, 2.0);
    }

    #[test]
    fn test_averages() {
        let (t, processes) = sample();
        let kpi = SimulationKpi::calculate(&t, &processes, &SimulationConfig::new());

        // A: turnaround 3, waiting 0, response 0. B: 6, 2, 2.
        assert!((kpi.avg_turnaround_time - 4.5).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 1.0).abs() < 1e-10);
        assert!((kpi.avg_response_time - 1.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 9.0);
        assert!((kpi.cpu_utilization - 7.0 / 9.0).abs() < 1e-10);
        assert!((kpi.throughput - 2.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let kpi = SimulationKpi::calculate(&Timeline::new(), &[], &SimulationConfig::new());
        assert_eq!(kpi.makespan, 0.0);
        assert_eq!(kpi.avg_waiting_time, 0.0);
        assert_eq!(kpi.cpu_utilization, 0.0);
        assert!(kpi.per_process.is_empty());
    }

    #[test]
    fn test_unscheduled_process_skipped() {
        let (t, mut processes) = sample();
        processes.push(Process::new("ghost", 1.0));
        let kpi = SimulationKpi::calculate(&t, &processes, &SimulationConfig::new());
        assert_eq!(kpi.per_process.len(), 2);
        assert!(kpi.for_process("ghost").is_none());
    }

    #[test]
    fn test_arrivals_count_as_zero_when_ignored() {
        use crate::algorithms::{Algorithm, LongestJobFirst};

        let processes = vec![
            Process::new("A", 2.0).with_arrival(50.0),
            Process::new("B", 4.0).with_arrival(10.0),
        ];
        let sim = LongestJobFirst::default().with_processes(processes.clone());
        let t = sim.do_algorithm(false).unwrap();

        let config = SimulationConfig::new().with_arrival_time(false);
        let kpi = SimulationKpi::calculate(&t, &processes, &config);

        // B 0..4, A 4..6, both counted from t=0.
        let a = kpi.for_process("A").unwrap();
        assert_eq!(a.completion_time, 6.0);
        assert_eq!(a.turnaround_time, 6.0);
        assert_eq!(a.waiting_time, 4.0);
        assert_eq!(a.response_time, 4.0);
        assert_eq!(kpi.avg_turnaround_time, 5.0);
        assert!(kpi
            .per_process
            .iter()
            .all(|m| m.turnaround_time >= 0.0 && m.waiting_time >= 0.0 && m.response_time >= 0.0));
    }
}
