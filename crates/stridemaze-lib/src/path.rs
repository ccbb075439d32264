use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::grid::{Coord, Grid};
use crate::state::{expand_into, State};

/// Counters collected while exploring the state graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States whose distance was finalized.
    pub settled: usize,
    /// Successor edges produced by expansion.
    pub generated: usize,
    /// Successful distance improvements.
    pub relaxed: usize,
}

/// Result of a full single-source search.
#[derive(Debug, Clone)]
pub struct SearchTree {
    start: State,
    settled: HashMap<State, u64>,
    parents: HashMap<State, Option<State>>,
    stats: SearchStats,
}

impl SearchTree {
    pub fn start(&self) -> State {
        self.start
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of settled states.
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Finalized distance for `state`, if it was reached.
    pub fn cost(&self, state: &State) -> Option<u64> {
        self.settled.get(state).copied()
    }

    /// Iterate all settled states and their distances in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (State, u64)> + '_ {
        self.settled.iter().map(|(state, cost)| (*state, *cost))
    }

    /// Settled states located on `coord`.
    pub fn states_at(&self, coord: Coord) -> impl Iterator<Item = (State, u64)> + '_ {
        self.iter().filter(move |(state, _)| state.coord() == coord)
    }

    /// Walk predecessor links from `goal` back to the start.
    pub fn path_to(&self, goal: State) -> Option<Vec<State>> {
        if !self.settled.contains_key(&goal) {
            return None;
        }
        Some(reconstruct_path(&self.parents, self.start, goal))
    }
}

/// Run Dijkstra's algorithm from `start` until every reachable state is
/// settled.
///
/// Edges are generated on demand by [`expand_into`]. All edge weights are
/// strides, so they are at least one and the greedy settle order is exact.
pub fn explore(grid: &Grid, start: State) -> SearchTree {
    let mut distances: HashMap<State, u64> = HashMap::new();
    let mut parents: HashMap<State, Option<State>> = HashMap::new();
    let mut settled: HashMap<State, u64> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut stats = SearchStats::default();
    let mut successors = Vec::with_capacity(8);

    distances.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if settled.contains_key(&entry.state) {
            continue;
        }
        match distances.get(&entry.state) {
            Some(distance) if *distance < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        settled.insert(entry.state, entry.cost);
        stats.settled += 1;

        successors.clear();
        expand_into(grid, entry.state, &mut successors);
        stats.generated += successors.len();

        for successor in &successors {
            let next = successor.state;
            if settled.contains_key(&next) {
                continue;
            }

            let next_cost = entry.cost.saturating_add(successor.cost);
            if next_cost < *distances.get(&next).unwrap_or(&u64::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.state));
                queue.push(QueueEntry::new(next, next_cost));
                stats.relaxed += 1;
            }
        }
    }

    debug!(
        start = %start,
        settled = stats.settled,
        generated = stats.generated,
        relaxed = stats.relaxed,
        "state graph exhausted"
    );

    SearchTree {
        start,
        settled,
        parents,
        stats,
    }
}

fn reconstruct_path(
    parents: &HashMap<State, Option<State>>,
    start: State,
    goal: State,
) -> Vec<State> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(state) = current {
        path.push(state);
        if state == start {
            break;
        }
        current = parents.get(&state).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    state: State,
    cost: u64,
}

impl QueueEntry {
    fn new(state: State, cost: u64) -> Self {
        Self { state, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
