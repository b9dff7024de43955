use forage_core::{clamp01, lerp, AgentSnapshot, Vec2};
use serde::Serialize;

use crate::config::SimConfig;
use crate::field::FieldItem;

/// The physical agent: position, control signal and backpack.
///
/// The backpack persists across decades; only the position is reset between them.
#[derive(Debug, Clone, Default)]
pub struct Forager {
    pub position: Vec2,
    /// Desired direction written by the controller, normalized on use.
    pub control: Vec2,
    pub stats: BackpackStats,
    pub max_weight: i32,
    backpack: Vec<FieldItem>,
}

/// Accumulated totals of everything collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackpackStats {
    pub value: i32,
    pub weight: i32,
    pub stress: i32,
    pub items: u32,
}

impl Forager {
    pub fn new(max_weight: i32) -> Self {
        Self {
            max_weight,
            ..Self::default()
        }
    }

    pub fn backpack(&self) -> &[FieldItem] {
        &self.backpack
    }

    /// Totals saturate at the `i32` bounds.
    pub fn add_to_backpack(&mut self, item: FieldItem) {
        self.stats.value = self.stats.value.saturating_add(item.candidate.value);
        self.stats.weight = self.stats.weight.saturating_add(item.candidate.weight);
        self.stats.stress = self.stats.stress.saturating_add(item.candidate.stress_cost);
        self.stats.items = self.stats.items.saturating_add(1);
        self.backpack.push(item);
    }

    /// Current movement speed; heavier backpacks move slower.
    pub fn speed(&self, config: &SimConfig) -> f32 {
        let ratio = clamp01(self.stats.weight as f32 / self.max_weight as f32);
        lerp(config.base_speed, config.min_speed, ratio)
    }

    /// Integrate one fixed step along the control signal, then keep the agent on the map.
    pub fn step(&mut self, config: &SimConfig, dt: f32) {
        let direction = self.control.normalize_or_zero();
        self.position += direction * (self.speed(config) * dt);

        let (half_w, half_h) = config.half_extents();
        let bound = Vec2::new(half_w + 1.0, half_h + 1.0);
        self.position = self.position.clamp(-bound, bound);
    }

    /// Stop and return to the field centre.
    pub fn reset_position(&mut self) {
        self.position = Vec2::ZERO;
        self.control = Vec2::ZERO;
    }

    pub fn snapshot(&self, remaining_time: f32) -> AgentSnapshot {
        AgentSnapshot::new(self.position, remaining_time, self.max_weight)
            .with_stress(self.stats.stress)
            .with_weight(self.stats.weight)
    }
}
