use crate::Vec2;

/// Per-tick inputs shared by every strategy call.
///
/// Time only advances through `dt_seconds`; there is no global clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    /// Raw two-axis directional input for this tick, each axis in `[-1, 1]`.
    pub input: Vec2,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds,
            input: Vec2::ZERO,
        }
    }

    pub fn with_input(mut self, input: Vec2) -> Self {
        self.input = input;
        self
    }

    /// Elapsed time with negative and non-finite values treated as zero.
    pub fn elapsed(&self) -> f32 {
        if self.dt_seconds.is_finite() {
            self.dt_seconds.max(0.0)
        } else {
            0.0
        }
    }
}
