use forage_core::{direction_to, AgentSnapshot, Candidate, Strategy, TickContext, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BacktrackConfig {
    /// The strategy stands still until its think timer reaches this many seconds.
    pub think_seconds: f32,
    /// The think timer goes back to zero once it exceeds this many seconds.
    ///
    /// Kept separate from `think_seconds`: between the two the strategy keeps deciding every
    /// tick before it starts "thinking" again.
    pub reset_seconds: f32,
}

impl Default for BacktrackConfig {
    fn default() -> Self {
        Self {
            think_seconds: 1.0,
            reset_seconds: 1.2,
        }
    }
}

/// Cautious policy with simulated deliberation latency.
///
/// Once it is done thinking it walks toward the lowest-stress candidate. It does not remember
/// which target it picked; every decision is recomputed from scratch.
#[derive(Debug, Clone, Default)]
pub struct BacktrackStrategy {
    config: BacktrackConfig,
    think_timer: f32,
}

impl BacktrackStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BacktrackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> BacktrackConfig {
        self.config
    }

    pub fn think_timer(&self) -> f32 {
        self.think_timer
    }

    /// Active candidate with the strictly smallest stress cost; the first one wins ties.
    pub fn pick(candidates: &[Candidate]) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in candidates.iter().filter(|c| c.active) {
            match best {
                Some(current) if candidate.stress_cost >= current.stress_cost => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

impl Strategy for BacktrackStrategy {
    fn calculate_move(
        &mut self,
        ctx: &TickContext,
        agent: &AgentSnapshot,
        candidates: &[Candidate],
    ) -> Vec2 {
        self.think_timer += ctx.elapsed();
        if self.think_timer < self.config.think_seconds {
            return Vec2::ZERO;
        }
        if self.think_timer > self.config.reset_seconds {
            self.think_timer = 0.0;
        }

        match Self::pick(candidates) {
            Some(target) => direction_to(agent.position, target.position),
            None => Vec2::ZERO,
        }
    }

    fn name(&self) -> &'static str {
        "Backtrack"
    }
}
