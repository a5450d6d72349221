//! Synthetic workload generation.
//!
//! Produces reproducible process sets from a seed, for demos and for
//! exercising disciplines against many shapes of input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Process;

/// Seeded generator for random process sets.
///
/// Arrival and burst times are whole numbers so the stepped modes
/// never see fractional remainders unless a caller asks for them.
///
/// # Example
/// ```
/// use u_gantt::models::ProcessGenerator;
///
/// let a = ProcessGenerator::new(42).with_count(5).generate();
/// let b = ProcessGenerator::new(42).with_count(5).generate();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    seed: u64,
    count: usize,
    max_arrival: u32,
    min_burst: u32,
    max_burst: u32,
    max_priority: i32,
}

impl ProcessGenerator {
    /// Creates a generator with default ranges (5 processes, arrivals in
    /// 0..=10, bursts in 1..=10, priorities in 0..=5).
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range. A zero lower bound is raised to 1.
    pub fn with_burst_range(mut self, min_burst: u32, max_burst: u32) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Sets the highest possible priority.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Generates the process set, named `P1..Pn`.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                let priority = rng.random_range(0..=self.max_priority);
                Process::new(format!("P{i}"), f64::from(burst))
                    .with_arrival(f64::from(arrival))
                    .with_priority(priority)
            })
            .collect()
    }
}
