use forage_core::{direction_to, AgentSnapshot, Candidate, CandidateId, Strategy, TickContext, Vec2};

use crate::search::{find_best_path, DpConfig, VisitedSet};

/// Lookahead strategy with a cached first move.
///
/// The full search is `O(n^depth)`, so it only runs when the cached target has disappeared or
/// when `recalc_interval` simulated seconds have passed since the last search. In between the
/// agent keeps walking toward the cached target's live position, found by id. Candidate ids are
/// expected to be unique; with duplicates, cached ticks follow the first live match.
#[derive(Debug, Clone, Default)]
pub struct DpStrategy {
    config: DpConfig,
    cached_target: Option<CandidateId>,
    clock: f32,
    last_recalc_at: f32,
    recalculations: u64,
    live: Vec<Candidate>,
    visited: VisitedSet,
}

impl DpStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DpConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> DpConfig {
        self.config
    }

    pub fn cached_target(&self) -> Option<CandidateId> {
        self.cached_target
    }

    /// Number of full searches run so far (cache misses and throttle expiries).
    pub fn recalculations(&self) -> u64 {
        self.recalculations
    }

    /// Simulated seconds this instance has been ticked for.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    fn refresh_live(&mut self, candidates: &[Candidate]) {
        self.live.clear();
        self.live.extend(candidates.iter().filter(|c| c.active).copied());
    }

    fn live_position(&self, id: CandidateId) -> Option<Vec2> {
        self.live.iter().find(|c| c.id == id).map(|c| c.position)
    }

    fn recalculation_due(&self) -> bool {
        self.cached_target.is_none()
            || self.clock - self.last_recalc_at >= self.config.recalc_interval
    }

    /// Run the full search and return the chosen candidate's position.
    fn recalculate(&mut self, agent: &AgentSnapshot) -> Option<Vec2> {
        let choice = find_best_path(&self.config, agent, &self.live, &mut self.visited);
        let chosen = choice.map(|index| self.live[index].id);

        if chosen != self.cached_target {
            tracing::debug!(
                previous = ?self.cached_target,
                chosen = ?chosen,
                live = self.live.len(),
                clock = self.clock,
                "dp target changed"
            );
        }

        self.cached_target = chosen;
        self.last_recalc_at = self.clock;
        self.recalculations = self.recalculations.saturating_add(1);
        choice.map(|index| self.live[index].position)
    }
}

impl Strategy for DpStrategy {
    fn calculate_move(
        &mut self,
        ctx: &TickContext,
        agent: &AgentSnapshot,
        candidates: &[Candidate],
    ) -> Vec2 {
        self.clock += ctx.elapsed();
        self.refresh_live(candidates);

        if let Some(id) = self.cached_target {
            if self.live_position(id).is_none() {
                tracing::trace!(target_id = %id, "dp cached target no longer live");
                self.cached_target = None;
            }
        }

        // A fresh search addresses its pick by index; cached ticks resolve the id.
        let fresh = if self.recalculation_due() {
            self.recalculate(agent)
        } else {
            None
        };

        fresh
            .or_else(|| self.cached_target.and_then(|id| self.live_position(id)))
            .map(|position| direction_to(agent.position, position))
            .unwrap_or(Vec2::ZERO)
    }

    fn name(&self) -> &'static str {
        "DP"
    }
}
