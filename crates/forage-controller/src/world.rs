use forage_core::{AgentSnapshot, Candidate, Vec2};

/// Live collectibles, refreshed by the map collaborator.
pub trait CandidateSource {
    fn candidates(&self) -> &[Candidate];
}

/// Fresh snapshot of the physical agent.
pub trait AgentSource {
    fn agent_snapshot(&self) -> AgentSnapshot;
}

/// Round flow flags.
pub trait RoundState {
    fn is_paused(&self) -> bool;

    fn is_running(&self) -> bool {
        true
    }

    /// True when no strategy should run this tick.
    fn is_suspended(&self) -> bool {
        self.is_paused() || !self.is_running()
    }
}

/// Raw two-axis input, consumed only by the manual strategy.
pub trait InputSource {
    fn input_axes(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// The agent's control signal, read by the movement integrator.
pub trait ControlSink {
    fn set_control(&mut self, direction: Vec2);
}

/// Everything the controller needs from its collaborators.
///
/// The core intentionally does not prescribe how these are stored; implement the individual
/// traits and this one comes for free.
pub trait DecisionWorld: CandidateSource + AgentSource + RoundState + InputSource + ControlSink {}

impl<W> DecisionWorld for W where
    W: CandidateSource + AgentSource + RoundState + InputSource + ControlSink
{
}
