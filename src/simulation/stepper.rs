//! Shared time-stepping core.
//!
//! # Algorithm
//!
//! 1. Order the working set by arrival into a pending list.
//! 2. Move every pending process with `arrival <= clock` into the ready queue.
//! 3. If nothing is ready, emit an idle gap up to the next arrival.
//! 4. Pop the best-ranked process and run it for one step (preemptive) or
//!    to completion (non-preemptive). A step that exhausts the remaining
//!    burst stamps the completion time.
//! 5. Push an unfinished process back with its new key and repeat.
//!
//! Slices go through [`Timeline::push`], which coalesces consecutive steps
//! of the same process into one bar.
//!
//! # Complexity
//! O(u log n) for the stepped mode where u = total burst units, O(n log n)
//! otherwise.

use tracing::trace;

use crate::config::SimulationConfig;
use crate::dispatching::{name_ranks, Candidate, RankKey, ReadyQueue, SelectionRule};
use crate::models::{Process, Slice, Timeline};

/// Runs a process set under the mode selected by `config`.
///
/// Works on a copy; the caller's processes are never modified. Input is
/// assumed valid (see [`crate::validation`]).
pub fn simulate(rule: &dyn SelectionRule, processes: &[Process], config: &SimulationConfig) -> Timeline {
    let mut working = processes.to_vec();
    if !config.with_arrival_time {
        reset_arrivals(&mut working);
    }

    match (config.with_arrival_time, config.preemptive) {
        (_, true) => run_stepped(rule, &working, config.time_unit),
        (true, false) => run_to_completion(rule, &working),
        (false, false) => run_static(rule, &working),
    }
}

/// Runs with interruption: the best eligible process runs for at most
/// `time_unit`, then every eligible process is re-ranked.
///
/// A remaining burst of `time_unit` or less is consumed in one final step,
/// as is one too large for a `time_unit` step to reduce.
pub fn run_stepped(rule: &dyn SelectionRule, processes: &[Process], time_unit: f64) -> Timeline {
    WorkingSet::new(rule, processes).run(Some(time_unit))
}

/// Runs without interruption: once selected, a process runs to completion
/// in one slice.
pub fn run_to_completion(rule: &dyn SelectionRule, processes: &[Process]) -> Timeline {
    WorkingSet::new(rule, processes).run(None)
}

/// Runs a set where nothing is gated on arrival and nothing is interrupted.
///
/// The initial ranking is already the execution order, so this is a single
/// sort followed by cumulative completion times. Arrival times only take
/// part as a tie-break; callers zero them first.
pub fn run_static(rule: &dyn SelectionRule, processes: &[Process]) -> Timeline {
    let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
    let ranks = name_ranks(&names);

    let mut order: Vec<(usize, RankKey)> = processes
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let score = rule.score(&Candidate::from_process(p));
            (i, RankKey::new(score, p.arrival_time, ranks[i]))
        })
        .collect();
    order.sort_by(|a, b| a.1.run_order(&b.1));

    let mut timeline = Timeline::new();
    let mut timer = 0.0;
    for (i, _) in order {
        let p = &processes[i];
        let start = timer;
        timer += p.burst_time;
        trace!(process = %p.name, start, end = timer, "run");
        timeline.push(Slice::new(p.name.as_str(), start, p.burst_time).completing_at(timer));
    }
    timeline
}

/// Forces every arrival time to zero so arrival never gates eligibility.
pub fn reset_arrivals(processes: &mut [Process]) {
    for p in processes {
        p.arrival_time = 0.0;
    }
}

struct WorkingSet<'a> {
    rule: &'a dyn SelectionRule,
    processes: &'a [Process],
    remaining: Vec<f64>,
    ranks: Vec<usize>,
    // Slots ordered by arrival; `cursor` marks the first not yet admitted.
    pending: Vec<usize>,
    cursor: usize,
    ready: ReadyQueue,
}

impl<'a> WorkingSet<'a> {
    fn new(rule: &'a dyn SelectionRule, processes: &'a [Process]) -> Self {
        let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
        let ranks = name_ranks(&names);

        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by(|&a, &b| {
            processes[a]
                .arrival_time
                .total_cmp(&processes[b].arrival_time)
        });

        Self {
            rule,
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            ranks,
            pending,
            cursor: 0,
            ready: ReadyQueue::with_capacity(processes.len()),
        }
    }

    fn key(&self, slot: usize) -> RankKey {
        let p = &self.processes[slot];
        let candidate = Candidate::from_process(p).with_remaining(self.remaining[slot]);
        RankKey::new(self.rule.score(&candidate), p.arrival_time, self.ranks[slot])
    }

    fn admit(&mut self, now: f64) {
        while let Some(&slot) = self.pending.get(self.cursor) {
            if self.processes[slot].arrival_time > now {
                break;
            }
            let key = self.key(slot);
            self.ready.push(slot, key);
            self.cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<f64> {
        self.pending
            .get(self.cursor)
            .map(|&slot| self.processes[slot].arrival_time)
    }

    fn run(mut self, step: Option<f64>) -> Timeline {
        let processes = self.processes;
        let mut timeline = Timeline::new();
        let mut timer = 0.0;

        loop {
            self.admit(timer);

            let Some(slot) = self.ready.pop() else {
                match self.next_arrival() {
                    Some(arrival) => {
                        trace!(start = timer, end = arrival, "idle");
                        timeline.push(Slice::idle(timer, arrival - timer));
                        timer = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let name = processes[slot].name.as_str();
            let left = self.remaining[slot];
            let start = timer;

            match step {
                // A step too small to change `left` in f64 ends the burst.
                Some(unit) if left > unit && left - unit < left => {
                    timer += unit;
                    self.remaining[slot] = left - unit;
                    trace!(process = name, start, end = timer, "step");
                    timeline.push(Slice::new(name, start, unit));
                    let key = self.key(slot);
                    self.ready.push(slot, key);
                }
                _ => {
                    timer += left;
                    self.remaining[slot] = 0.0;
                    trace!(process = name, start, end = timer, "complete");
                    timeline.push(Slice::new(name, start, left).completing_at(timer));
                }
            }
        }

        timeline
    }
}
