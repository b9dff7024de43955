//! Bounded-depth lookahead over future pickups.
//!
//! The search scores a candidate as "value collected if I go there next, plus the best value
//! reachable from there", up to [`DpConfig::max_depth`] picks. Infeasible branches end early
//! with fixed scores:
//!
//! | condition                         | branch score |
//! |-----------------------------------|--------------|
//! | travel time exceeds time left     | `0`          |
//! | pickup exceeds carrying capacity  | `-100`       |
//! | stress after pickup above ceiling | `-500`       |
//!
//! Future branches are floored at zero, so a bad continuation never drags a pick below its own
//! value. This is a tuned heuristic, not an expected-value maximizer; the constants in
//! [`DpConfig::default`] are what give the agent its foraging behaviour.

use forage_core::{lerp, AgentSnapshot, Candidate, SimulatedState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DpConfig {
    /// Minimum simulated seconds between full searches while a cached target is valid.
    pub recalc_interval: f32,
    /// Number of picks the search looks ahead, including the first move.
    pub max_depth: u32,
    /// Estimated speed with an empty backpack.
    pub base_speed: f32,
    /// Estimated speed at full capacity.
    pub min_speed: f32,
    /// Travel time is multiplied by `1 + stress / stress_divisor`.
    pub stress_divisor: f32,
    /// Post-pickup stress above this prunes the branch.
    pub stress_ceiling: i32,
    pub time_penalty: f32,
    pub overweight_penalty: f32,
    pub overstress_penalty: f32,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            recalc_interval: 0.5,
            max_depth: 3,
            base_speed: 5.0,
            min_speed: 1.0,
            stress_divisor: 50.0,
            stress_ceiling: 100,
            time_penalty: 0.0,
            overweight_penalty: -100.0,
            overstress_penalty: -500.0,
        }
    }
}

/// Reusable visited-set for the backtracking search, indexed by position in the live list.
///
/// One instance is cleared per search and threaded through the whole recursion by `&mut`;
/// entries are inserted before descending and removed on the way back up.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all marks and size the set for `len` candidates, keeping the allocation.
    pub fn reset(&mut self, len: usize) {
        self.marks.clear();
        self.marks.resize(len, false);
    }

    pub fn insert(&mut self, index: usize) {
        self.marks[index] = true;
    }

    pub fn remove(&mut self, index: usize) {
        self.marks[index] = false;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Number of candidates the set is sized for.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn is_clear(&self) -> bool {
        !self.marks.iter().any(|m| *m)
    }

    pub fn capacity(&self) -> usize {
        self.marks.capacity()
    }
}

/// Simulated seconds needed to walk from `state` to `target`, slowed by weight and stress.
pub fn travel_time(config: &DpConfig, state: &SimulatedState, target: &Candidate) -> f32 {
    let distance = state.position.distance(target.position);
    let speed = lerp(config.base_speed, config.min_speed, state.weight_ratio());
    let base = distance / speed;
    let multiplier = 1.0 + state.stress as f32 / config.stress_divisor;
    base * multiplier
}

/// Index into `live` of the best first move, or `None` when `live` is empty.
///
/// Every candidate is scored at depth 1 with the shared `visited` set; the first
/// strictly-greater score wins, so ties keep the earlier candidate.
pub fn find_best_path(
    config: &DpConfig,
    agent: &AgentSnapshot,
    live: &[Candidate],
    visited: &mut VisitedSet,
) -> Option<usize> {
    if live.is_empty() {
        return None;
    }

    let start = SimulatedState::from(agent);
    visited.reset(live.len());

    let mut best: Option<usize> = None;
    let mut best_score = f32::NEG_INFINITY;
    for index in 0..live.len() {
        let score = score_of(config, index, live, &start, 1, visited);
        if score > best_score {
            best_score = score;
            best = Some(index);
        }
    }
    best
}

/// Projected score of picking `live[target]` next from `state`, at lookahead `depth`.
///
/// `visited` must have been [`reset`](VisitedSet::reset) to `live.len()` and must not contain
/// `target`; it is left exactly as it was on return.
///
/// Weight and stress sums are compared in `i64`, so extreme item data prunes instead of
/// wrapping.
pub fn score_of(
    config: &DpConfig,
    target: usize,
    live: &[Candidate],
    state: &SimulatedState,
    depth: u32,
    visited: &mut VisitedSet,
) -> f32 {
    debug_assert!(
        visited.len() >= live.len(),
        "visited set sized for {} candidates, live list has {}",
        visited.len(),
        live.len()
    );

    let item = &live[target];
    let cost = travel_time(config, state, item);

    if state.remaining_time < cost {
        return config.time_penalty;
    }
    let carried = i64::from(state.weight) + i64::from(item.weight);
    if carried > i64::from(state.max_weight) {
        return config.overweight_penalty;
    }

    let stressed = i64::from(state.stress) + i64::from(item.stress_cost);
    let next = SimulatedState {
        position: item.position,
        remaining_time: state.remaining_time - cost,
        stress: state.stress.saturating_add(item.stress_cost),
        weight: state.weight.saturating_add(item.weight),
        max_weight: state.max_weight,
    };
    if stressed > i64::from(config.stress_ceiling) {
        return config.overstress_penalty;
    }

    let gain = item.value as f32;
    if depth >= config.max_depth {
        return gain;
    }

    visited.insert(target);
    let mut best_future = 0.0_f32;
    for other in 0..live.len() {
        if visited.contains(other) {
            continue;
        }
        let future = score_of(config, other, live, &next, depth + 1, visited);
        if future > best_future {
            best_future = future;
        }
    }
    visited.remove(target);

    gain + best_future
}
