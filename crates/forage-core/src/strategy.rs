use crate::{AgentSnapshot, Candidate, TickContext, Vec2};

/// A decision policy: picks a movement direction each tick.
///
/// Implementations must:
/// - return [`Vec2::ZERO`] when nothing is chosen (including an empty candidate slice),
/// - never mutate the agent or the candidates (only their own bookkeeping),
/// - tolerate candidates flipping to inactive between calls.
pub trait Strategy: 'static {
    fn calculate_move(
        &mut self,
        ctx: &TickContext,
        agent: &AgentSnapshot,
        candidates: &[Candidate],
    ) -> Vec2;

    /// Stable display label for the policy.
    fn name(&self) -> &'static str;
}

impl<S> Strategy for Box<S>
where
    S: Strategy + ?Sized,
{
    fn calculate_move(
        &mut self,
        ctx: &TickContext,
        agent: &AgentSnapshot,
        candidates: &[Candidate],
    ) -> Vec2 {
        (**self).calculate_move(ctx, agent, candidates)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Unit vector from `from` toward `to`; zero when they coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
