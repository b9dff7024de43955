//! Decade clock and end-of-round rules.

use core::fmt;

use serde::Serialize;

use crate::config::SimConfig;

/// Stress divisor applied to the wall clock: time runs `1 + stress / 50` times faster.
pub const STRESS_TIME_DIVISOR: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    /// Stress went above the limit mid-decade.
    Stress,
    /// The final age was reached.
    Age,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Stress => f.write_str("stress limit exceeded"),
            GameOverReason::Age => f.write_str("final age reached"),
        }
    }
}

/// What one clock advance produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Nothing happened, or the clock is stopped.
    Idle,
    Ticking,
    DecadeEnded { age: u32 },
    GameOver(GameOverReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundClock {
    age: u32,
    remaining: f32,
    paused: bool,
    game_over: Option<GameOverReason>,
}

impl RoundClock {
    /// A clock at age zero, paused until the first decade starts.
    pub fn new() -> Self {
        Self {
            age: 0,
            remaining: 0.0,
            paused: true,
            game_over: None,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.game_over.is_none()
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Refill the timer and unpause.
    pub fn start_decade(&mut self, config: &SimConfig) {
        self.remaining = config.time_limit;
        self.paused = false;
    }

    /// Advance by `dt` wall seconds under the given stress.
    ///
    /// Stress above the limit ends the round before any time passes. When the timer runs out
    /// the clock pauses and the age advances; reaching the final age ends the round.
    pub fn advance(&mut self, config: &SimConfig, dt: f32, stress: i32) -> ClockEvent {
        if self.paused || self.game_over.is_some() {
            return ClockEvent::Idle;
        }

        if stress > config.stress_limit {
            return self.finish(GameOverReason::Stress);
        }

        let multiplier = 1.0 + stress as f32 / STRESS_TIME_DIVISOR;
        self.remaining -= dt.max(0.0) * multiplier;

        if self.remaining > 0.0 {
            return ClockEvent::Ticking;
        }

        self.paused = true;
        self.age += config.age_step;
        if self.age >= config.final_age {
            return self.finish(GameOverReason::Age);
        }
        ClockEvent::DecadeEnded { age: self.age }
    }

    fn finish(&mut self, reason: GameOverReason) -> ClockEvent {
        self.paused = true;
        self.game_over = Some(reason);
        tracing::info!(age = self.age, %reason, "round over");
        ClockEvent::GameOver(reason)
    }
}

impl Default for RoundClock {
    fn default() -> Self {
        Self::new()
    }
}
