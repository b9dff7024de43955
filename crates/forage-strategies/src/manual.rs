use forage_core::{AgentSnapshot, Candidate, Strategy, TickContext, Vec2};

/// Passes the raw two-axis input through untouched.
///
/// The input is not normalized, so diagonal magnitude reaches the movement integrator as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualStrategy;

impl ManualStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ManualStrategy {
    fn calculate_move(
        &mut self,
        ctx: &TickContext,
        _agent: &AgentSnapshot,
        _candidates: &[Candidate],
    ) -> Vec2 {
        ctx.input
    }

    fn name(&self) -> &'static str {
        "Manual"
    }
}
