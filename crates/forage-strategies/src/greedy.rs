use forage_core::{direction_to, AgentSnapshot, Candidate, Strategy, TickContext, Vec2};

/// Distances below this are clamped before dividing.
pub const MIN_SCORE_DISTANCE: f32 = 0.1;

/// Heads for the best value-per-distance candidate on every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }

    /// `value / max(distance, MIN_SCORE_DISTANCE)`.
    pub fn score(agent: &AgentSnapshot, candidate: &Candidate) -> f32 {
        let distance = agent
            .position
            .distance(candidate.position)
            .max(MIN_SCORE_DISTANCE);
        candidate.value as f32 / distance
    }

    /// Highest scoring active candidate; the first one wins ties.
    pub fn pick<'a>(agent: &AgentSnapshot, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        let mut best: Option<&Candidate> = None;
        let mut best_score = f32::MIN;

        for candidate in candidates.iter().filter(|c| c.active) {
            let score = Self::score(agent, candidate);
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }

        best
    }
}

impl Strategy for GreedyStrategy {
    fn calculate_move(
        &mut self,
        _ctx: &TickContext,
        agent: &AgentSnapshot,
        candidates: &[Candidate],
    ) -> Vec2 {
        match Self::pick(agent, candidates) {
            Some(target) => direction_to(agent.position, target.position),
            None => Vec2::ZERO,
        }
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}
