use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Stable identity of one collectible on the field.
///
/// Ids survive across ticks, so strategies can re-validate a remembered target against a
/// fresh candidate list instead of holding on to a stale copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of one collectible resource.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Unique among the candidates handed to a strategy in one tick.
    pub id: CandidateId,
    pub position: Vec2,
    /// Reward for collecting it.
    pub value: i32,
    /// Capacity consumed once carried.
    pub weight: i32,
    /// Stress added once carried. Domain data is non-negative but nothing relies on it.
    pub stress_cost: i32,
    /// Cleared by the producer once the item is consumed or despawned.
    pub active: bool,
}

impl Candidate {
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id: CandidateId(id),
            position,
            value: 0,
            weight: 0,
            stress_cost: 0,
            active: true,
        }
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_stress_cost(mut self, stress_cost: i32) -> Self {
        self.stress_cost = stress_cost;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
