//! Algorithm capability contract and the discipline family.
//!
//! A host enumerates [`Discipline::ALL`], reads each one's capabilities to
//! populate its selection UI, builds the chosen one, feeds it a process set
//! and asks for a timeline.
//!
//! # Usage
//!
//! ```
//! use u_gantt::algorithms::{Algorithm, Discipline};
//! use u_gantt::models::Process;
//!
//! let mut ljf = Discipline::LongestJobFirst.build();
//! ljf.set_data(vec![Process::new("A", 3.0).with_arrival(5.0)]);
//!
//! let timeline = ljf.do_algorithm(true).unwrap();
//! assert_eq!(timeline.slices[0].name, "IDLE");
//! assert_eq!(timeline.completion_time_of("A"), Some(8.0));
//! ```

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::dispatching::rules::{Fcfs, HighestPriority, Ljf, Sjf};
use crate::dispatching::SelectionRule;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};
use crate::simulation::simulate;
use crate::validation::{validate_processes, validate_step_count};

/// The interface every scheduling discipline exposes to a host.
pub trait Algorithm: Send + Sync + Debug {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Whether the discipline supports an interrupting mode.
    fn can_be_preemptive(&self) -> bool;

    /// Whether priority participates in ordering.
    fn considers_priority(&self) -> bool;

    /// Whether a time quantum parameter is required.
    fn needs_quantum(&self) -> bool;

    /// Supplies the process set. Must be called before [`Algorithm::do_algorithm`].
    fn set_data(&mut self, processes: Vec<Process>);

    /// Current interruption flag.
    fn preemptive(&self) -> bool;

    /// Sets the interruption flag.
    fn set_preemptive(&mut self, preemptive: bool);

    /// Simulates the process set and returns the ordered slice sequence.
    ///
    /// The supplied processes are never modified; the run works on copies.
    ///
    /// # Errors
    /// - [`SimulationError::UninitializedInput`] if no data was set.
    /// - [`SimulationError::PreemptionUnsupported`] if the flag is set on a
    ///   discipline that cannot preempt.
    /// - [`SimulationError::InvalidInput`] if the process set fails validation,
    ///   including bursts too long to step through in preemptive mode.
    fn do_algorithm(&self, with_arrival_time: bool) -> Result<Timeline, SimulationError>;

    /// One-line explanation for tooltips.
    fn on_hover_description(&self) -> &'static str;
}

/// Shared implementation of [`Algorithm`] for any selection rule.
#[derive(Debug, Clone)]
pub struct Simulator<R: SelectionRule> {
    rule: R,
    processes: Option<Vec<Process>>,
    preemptive: bool,
    time_unit: f64,
}

/// Longest Job First.
pub type LongestJobFirst = Simulator<Ljf>;
/// Shortest Job First.
pub type ShortestJobFirst = Simulator<Sjf>;
/// First Come First Served.
pub type FirstComeFirstServed = Simulator<Fcfs>;
/// Priority scheduling.
pub type PriorityScheduling = Simulator<HighestPriority>;

impl<R: SelectionRule> Simulator<R> {
    /// Creates a non-preemptive simulator with unit steps and no data.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            processes: None,
            preemptive: false,
            time_unit: 1.0,
        }
    }

    /// Supplies the process set.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = Some(processes);
        self
    }

    /// Sets the interruption flag.
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Sets the stepping unit used by preemptive runs.
    pub fn with_time_unit(mut self, time_unit: f64) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// The selection rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The supplied process set, untouched by any run.
    pub fn processes(&self) -> Option<&[Process]> {
        self.processes.as_deref()
    }

    /// Simulates under an explicit configuration.
    ///
    /// The configuration's flags override the simulator's own preemptive
    /// flag and time unit.
    pub fn run(&self, config: &SimulationConfig) -> Result<Timeline, SimulationError> {
        let processes = self
            .processes
            .as_deref()
            .ok_or(SimulationError::UninitializedInput)?;
        config.validate()?;

        if config.preemptive && !self.rule.can_be_preemptive() {
            return Err(SimulationError::PreemptionUnsupported {
                algorithm: self.rule.name(),
            });
        }

        let mut problems = validate_processes(processes).err().unwrap_or_default();
        if config.preemptive {
            if let Err(errors) = validate_step_count(processes, config.time_unit) {
                problems.extend(errors);
            }
        }

        if !problems.is_empty() {
            warn!(
                algorithm = self.rule.name(),
                problems = problems.len(),
                "rejected process set"
            );
            return Err(problems.into());
        }

        debug!(
            algorithm = self.rule.name(),
            with_arrival_time = config.with_arrival_time,
            preemptive = config.preemptive,
            processes = processes.len(),
            "simulation start"
        );

        let timeline = simulate(&self.rule, processes, config);

        debug!(
            algorithm = self.rule.name(),
            slices = timeline.len(),
            makespan = timeline.makespan(),
            "simulation done"
        );
        Ok(timeline)
    }
}

impl<R: SelectionRule + Default> Default for Simulator<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: SelectionRule> Algorithm for Simulator<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn can_be_preemptive(&self) -> bool {
        self.rule.can_be_preemptive()
    }

    fn considers_priority(&self) -> bool {
        self.rule.considers_priority()
    }

    fn needs_quantum(&self) -> bool {
        self.rule.needs_quantum()
    }

    fn set_data(&mut self, processes: Vec<Process>) {
        self.processes = Some(processes);
    }

    fn preemptive(&self) -> bool {
        self.preemptive
    }

    fn set_preemptive(&mut self, preemptive: bool) {
        self.preemptive = preemptive;
    }

    fn do_algorithm(&self, with_arrival_time: bool) -> Result<Timeline, SimulationError> {
        let config = SimulationConfig::new()
            .with_arrival_time(with_arrival_time)
            .with_preemptive(self.preemptive)
            .with_time_unit(self.time_unit);
        self.run(&config)
    }

    fn on_hover_description(&self) -> &'static str {
        self.rule.description()
    }
}

/// The closed family of supported disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// Largest remaining burst first.
    LongestJobFirst,
    /// Smallest remaining burst first.
    ShortestJobFirst,
    /// Arrival order.
    FirstComeFirstServed,
    /// Highest priority value first.
    Priority,
}

impl Discipline {
    /// Every discipline, in menu order.
    pub const ALL: [Discipline; 4] = [
        Discipline::LongestJobFirst,
        Discipline::ShortestJobFirst,
        Discipline::FirstComeFirstServed,
        Discipline::Priority,
    ];

    /// The selection rule that defines this discipline.
    pub fn rule(self) -> &'static dyn SelectionRule {
        match self {
            Discipline::LongestJobFirst => &Ljf,
            Discipline::ShortestJobFirst => &Sjf,
            Discipline::FirstComeFirstServed => &Fcfs,
            Discipline::Priority => &HighestPriority,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.rule().name()
    }

    /// Builds a fresh, non-preemptive instance with no data.
    pub fn build(self) -> Box<dyn Algorithm> {
        match self {
            Discipline::LongestJobFirst => Box::new(LongestJobFirst::default()),
            Discipline::ShortestJobFirst => Box::new(ShortestJobFirst::default()),
            Discipline::FirstComeFirstServed => Box::new(FirstComeFirstServed::default()),
            Discipline::Priority => Box::new(PriorityScheduling::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IDLE_NAME;
    use crate::validation::ValidationError;

    fn ljf(processes: Vec<Process>, preemptive: bool) -> LongestJobFirst {
        LongestJobFirst::default()
            .with_processes(processes)
            .with_preemptive(preemptive)
    }

    fn names(t: &Timeline) -> Vec<&str> {
        t.iter().map(|s| s.name.as_str()).collect()
    }

    fn assert_no_adjacent_duplicates(t: &Timeline) {
        for pair in t.slices.windows(2) {
            assert_ne!(pair[0].name, pair[1].name, "unmerged slices in {t:?}");
        }
    }

    #[test]
    fn test_static_order_without_arrivals() {
        let processes = vec![
            Process::new("P2", 10.0),
            Process::new("P3", 5.0),
            Process::new("P1", 10.0),
        ];
        let t = ljf(processes, false).do_algorithm(false).unwrap();

        assert_eq!(names(&t), vec!["P1", "P2", "P3"]);
        assert_eq!(t.completion_time_of("P1"), Some(10.0));
        assert_eq!(t.completion_time_of("P2"), Some(20.0));
        assert_eq!(t.completion_time_of("P3"), Some(25.0));
    }

    #[test]
    fn test_static_order_ignores_supplied_arrivals() {
        let processes = vec![
            Process::new("A", 2.0).with_arrival(50.0),
            Process::new("B", 4.0).with_arrival(10.0),
        ];
        let t = ljf(processes, false).do_algorithm(false).unwrap();

        assert_eq!(names(&t), vec!["B", "A"]);
        assert!(t.iter().all(|s| !s.is_idle()));
        assert_eq!(t.makespan(), 6.0);
    }

    #[test]
    fn test_preemptive_without_arrivals_levels_bursts() {
        // B starts (larger burst) and runs until it is level with A; from
        // then on the two alternate, A first on ties by name.
        let processes = vec![Process::new("A", 3.0), Process::new("B", 5.0)];
        let t = ljf(processes, true).do_algorithm(false).unwrap();

        assert_eq!(t.slices[0].name, "B");
        assert_eq!(t.slices[0].duration, 2.0);
        assert_eq!(names(&t), vec!["B", "A", "B", "A", "B", "A", "B"]);
        assert_eq!(t.completion_time_of("A"), Some(7.0));
        assert_eq!(t.completion_time_of("B"), Some(8.0));
        assert_eq!(t.service_time_of("A"), 3.0);
        assert_eq!(t.service_time_of("B"), 5.0);
        assert_no_adjacent_duplicates(&t);
    }

    #[test]
    fn test_preemptive_without_arrivals_single_process_is_one_bar() {
        let t = ljf(vec![Process::new("B", 5.0).with_arrival(3.0)], true)
            .do_algorithm(false)
            .unwrap();

        assert_eq!(t.len(), 1);
        assert_eq!(t.slices[0].start, 0.0);
        assert_eq!(t.slices[0].duration, 5.0);
        assert_eq!(t.slices[0].completion_time, Some(5.0));
    }

    #[test]
    fn test_arrival_with_idle_gap() {
        let t = ljf(vec![Process::new("A", 3.0).with_arrival(5.0)], false)
            .do_algorithm(true)
            .unwrap();

        assert_eq!(names(&t), vec![IDLE_NAME, "A"]);
        assert_eq!(t.slices[0].duration, 5.0);
        assert_eq!(t.slices[1].duration, 3.0);
        assert_eq!(t.completion_time_of("A"), Some(8.0));
    }

    #[test]
    fn test_preemptive_with_arrivals() {
        let processes = vec![
            Process::new("A", 2.0).with_arrival(1.0),
            Process::new("B", 6.0).with_arrival(2.0),
        ];
        let t = ljf(processes, true).do_algorithm(true).unwrap();

        // Idle 0-1, A 1-2, B takes over at 2 and runs until level with A at
        // 7; A wins that tie on earlier arrival.
        assert_eq!(names(&t), vec![IDLE_NAME, "A", "B", "A", "B"]);
        assert_eq!(t.slices[2].duration, 5.0);
        assert_eq!(t.completion_time_of("A"), Some(8.0));
        assert_eq!(t.completion_time_of("B"), Some(9.0));
        assert!(t.is_contiguous());
    }

    #[test]
    fn test_tie_break_by_name_is_repeatable() {
        let processes = vec![Process::new("b", 4.0), Process::new("a", 4.0)];
        let sim = ljf(processes, false);

        let first = sim.do_algorithm(true).unwrap();
        for _ in 0..5 {
            assert_eq!(sim.do_algorithm(true).unwrap(), first);
        }
        assert_eq!(names(&first), vec!["a", "b"]);
    }

    #[test]
    fn test_caller_data_untouched() {
        let processes = vec![
            Process::new("A", 3.0).with_arrival(4.0),
            Process::new("B", 5.0).with_arrival(1.0),
        ];
        let sim = ljf(processes.clone(), true);

        sim.do_algorithm(false).unwrap();
        sim.do_algorithm(true).unwrap();

        assert_eq!(sim.processes(), Some(processes.as_slice()));
    }

    #[test]
    fn test_uninitialized_input() {
        let sim = LongestJobFirst::default();
        assert_eq!(
            sim.do_algorithm(true),
            Err(SimulationError::UninitializedInput)
        );
    }

    #[test]
    fn test_empty_input_is_empty_timeline() {
        let t = ljf(Vec::new(), true).do_algorithm(true).unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![Process::new("A", 1.0), Process::new("A", 0.0)];
        let err = ljf(processes, false).do_algorithm(true).unwrap_err();

        match err {
            SimulationError::InvalidInput(errors) => {
                assert!(errors.contains(&ValidationError::DuplicateIdentity { name: "A".into() }));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::InvalidBurstTime { .. })));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_burst_too_long_to_step_is_rejected() {
        let sim = ljf(vec![Process::new("A", 1e17)], true);
        let err = sim.do_algorithm(true).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidInput(ref errors)
                if matches!(errors[..], [ValidationError::TooManySteps { .. }])
        ));

        // Without stepping the same burst runs in one slice.
        let t = ljf(vec![Process::new("A", 1e17)], false)
            .do_algorithm(true)
            .unwrap();
        assert_eq!(t.completion_time_of("A"), Some(1e17));
    }

    #[test]
    fn test_fcfs_rejects_preemption() {
        let mut fcfs = Discipline::FirstComeFirstServed.build();
        fcfs.set_data(vec![Process::new("A", 1.0)]);
        fcfs.set_preemptive(true);

        assert!(matches!(
            fcfs.do_algorithm(true),
            Err(SimulationError::PreemptionUnsupported { .. })
        ));
    }

    #[test]
    fn test_run_with_config_time_unit() {
        let sim = ljf(vec![Process::new("A", 2.0), Process::new("B", 2.0)], false);
        let config = SimulationConfig::new()
            .with_preemptive(true)
            .with_time_unit(0.5);
        let t = sim.run(&config).unwrap();

        // Half-unit steps: A, B alternate once both are level.
        assert_eq!(t.slices[0].name, "A");
        assert_eq!(t.slices[0].duration, 0.5);
        assert_eq!(t.service_time_of("A"), 2.0);
        assert_eq!(t.service_time_of("B"), 2.0);
        assert_no_adjacent_duplicates(&t);
    }

    #[test]
    fn test_run_rejects_bad_time_unit() {
        let sim = ljf(vec![Process::new("A", 2.0)], true);
        let config = SimulationConfig::new().with_preemptive(true).with_time_unit(0.0);
        assert_eq!(sim.run(&config), Err(SimulationError::InvalidTimeUnit(0.0)));
    }

    #[test]
    fn test_discipline_metadata() {
        for d in Discipline::ALL {
            let algo = d.build();
            assert_eq!(algo.name(), d.name());
            assert!(!algo.needs_quantum());
            assert!(!algo.preemptive());
            assert!(!algo.on_hover_description().is_empty());
        }

        let longest = Discipline::LongestJobFirst.build();
        assert_eq!(longest.name(), "Longest Job First");
        assert!(longest.can_be_preemptive());
        assert!(!longest.considers_priority());
        assert_eq!(
            longest.on_hover_description(),
            "This algorithm takes the longest job available and executes it first."
        );

        assert!(Discipline::Priority.build().considers_priority());
        assert!(!Discipline::FirstComeFirstServed.build().can_be_preemptive());
    }

    #[test]
    fn test_discipline_serde() {
        let json = serde_json::to_string(&Discipline::LongestJobFirst).unwrap();
        assert_eq!(json, "\"LongestJobFirst\"");
        let back: Discipline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Discipline::LongestJobFirst);
    }

    #[test]
    fn test_every_discipline_conserves_burst() {
        let processes = vec![
            Process::new("A", 4.0).with_arrival(0.0).with_priority(1),
            Process::new("B", 2.0).with_arrival(1.0).with_priority(3),
            Process::new("C", 6.0).with_arrival(9.0).with_priority(2),
        ];

        for d in Discipline::ALL {
            let mut algo = d.build();
            algo.set_data(processes.clone());
            for preemptive in [false, true] {
                if preemptive && !algo.can_be_preemptive() {
                    continue;
                }
                algo.set_preemptive(preemptive);
                for with_arrival in [false, true] {
                    let t = algo.do_algorithm(with_arrival).unwrap();
                    for p in &processes {
                        assert_eq!(t.service_time_of(&p.name), p.burst_time, "{d:?}");
                        assert!(t.completion_time_of(&p.name).is_some());
                    }
                    assert!(t.is_contiguous());
                    assert_no_adjacent_duplicates(&t);
                }
            }
        }
    }
}
