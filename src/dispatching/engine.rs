//! Ranking and the ready queue.
//!
//! Every discipline orders eligible candidates by the same composite key:
//! rule score, then arrival time, then name. The ready queue is a binary
//! heap over that key, seeded lazily as the clock passes each arrival.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::RuleScore;

/// Composite ordering key of a candidate.
///
/// `name_rank` is the candidate's position in ordinal name order; names
/// are unique, so two keys are equal only for the same process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankKey {
    /// Rule score (lower runs first).
    pub score: RuleScore,
    /// Arrival time (earlier runs first on equal score).
    pub arrival_time: f64,
    /// Position in ordinal name order.
    pub name_rank: usize,
}

impl RankKey {
    /// Creates a key.
    pub fn new(score: RuleScore, arrival_time: f64, name_rank: usize) -> Self {
        Self {
            score,
            arrival_time,
            name_rank,
        }
    }

    /// `Less` means `self` runs before `other`.
    pub fn run_order(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.arrival_time.total_cmp(&other.arrival_time))
            .then_with(|| self.name_rank.cmp(&other.name_rank))
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: RankKey,
    slot: usize,
}

// BinaryHeap is a max-heap, so flip the run order: first-to-run is greatest.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .run_order(&self.key)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Max-heap of eligible candidates, addressed by slot index into the
/// caller's working set.
///
/// # Complexity
/// O(log n) push and pop, against the O(n) rescan a sorted list needs after
/// every step.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    heap: BinaryHeap<Entry>,
}

impl ReadyQueue {
    /// Creates an empty queue with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Makes a candidate eligible.
    pub fn push(&mut self, slot: usize, key: RankKey) {
        self.heap.push(Entry { key, slot });
    }

    /// Removes and returns the slot that runs next.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.slot)
    }
}

/// Position of each name in ordinal (byte-wise) order.
///
/// The sort is stable, so equal names keep encounter order.
pub(crate) fn name_ranks(names: &[&str]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by(|&a, &b| names[a].cmp(names[b]));

    let mut ranks = vec![0; names.len()];
    for (rank, &i) in order.iter().enumerate() {
        ranks[i] = rank;
    }
    ranks
}
