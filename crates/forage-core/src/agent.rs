#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{clamp01, Vec2};

/// Read-only view of the live agent, rebuilt by the caller every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentSnapshot {
    pub position: Vec2,
    /// Seconds until the round ends.
    pub remaining_time: f32,
    /// Accumulated stress. The game-over ceiling is enforced upstream.
    pub stress: i32,
    /// Currently carried weight.
    pub weight: i32,
    /// Carrying capacity, constant for a round.
    pub max_weight: i32,
}

impl AgentSnapshot {
    pub fn new(position: Vec2, remaining_time: f32, max_weight: i32) -> Self {
        Self {
            position,
            remaining_time,
            stress: 0,
            weight: 0,
            max_weight,
        }
    }

    pub fn with_stress(mut self, stress: i32) -> Self {
        self.stress = stress;
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}

/// Hypothetical agent state used inside lookahead searches ("if I went to X next").
///
/// Never written back to the live agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedState {
    pub position: Vec2,
    pub remaining_time: f32,
    pub stress: i32,
    pub weight: i32,
    pub max_weight: i32,
}

impl SimulatedState {
    /// Carried weight relative to capacity, clamped to `[0, 1]`.
    pub fn weight_ratio(&self) -> f32 {
        clamp01(self.weight as f32 / self.max_weight as f32)
    }
}

impl From<&AgentSnapshot> for SimulatedState {
    fn from(agent: &AgentSnapshot) -> Self {
        Self {
            position: agent.position,
            remaining_time: agent.remaining_time,
            stress: agent.stress,
            weight: agent.weight,
            max_weight: agent.max_weight,
        }
    }
}
