//! A headless round driven by the decision controller.

use forage_controller::{
    AgentSource, CandidateSource, ControlSink, DecisionController, InputSource, RoundState,
};
use forage_core::{AgentSnapshot, Candidate, Vec2};
use forage_strategies::StrategyKind;
use forage_tools::TraceSink;
use serde::Serialize;

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::field::Field;
use crate::forager::{BackpackStats, Forager};
use crate::rng::SplitMix64;
use crate::round::{ClockEvent, GameOverReason, RoundClock};

/// Upper bound on ticks in one [`Session::run_decade`] call.
///
/// Negative stress slows the clock and can stop it entirely, so a decade is not guaranteed to
/// end on its own.
pub const MAX_TICKS_PER_DECADE: u64 = 1_000_000;

/// Harness state seen by the controller.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub field: Field,
    pub forager: Forager,
    pub clock: RoundClock,
    /// Raw player input, only read by the manual strategy.
    pub input: Vec2,
}

impl CandidateSource for World {
    fn candidates(&self) -> &[Candidate] {
        self.field.candidates()
    }
}

impl AgentSource for World {
    fn agent_snapshot(&self) -> AgentSnapshot {
        self.forager.snapshot(self.clock.remaining())
    }
}

impl RoundState for World {
    fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    fn is_running(&self) -> bool {
        self.clock.is_running()
    }
}

impl InputSource for World {
    fn input_axes(&self) -> Vec2 {
        self.input
    }
}

impl ControlSink for World {
    fn set_control(&mut self, direction: Vec2) {
        self.forager.control = direction;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecadeOutcome {
    Completed,
    GameOver { reason: GameOverReason },
}

/// Result of one decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub strategy: String,
    pub age_from: u32,
    pub age_to: u32,
    /// Collected during this decade.
    pub gained: BackpackStats,
    /// Backpack totals at the end of the decade.
    pub totals: BackpackStats,
    pub outcome: DecadeOutcome,
}

pub struct Session {
    config: SimConfig,
    world: World,
    controller: DecisionController,
    rng: SplitMix64,
    next_id: u64,
    accumulator: f32,
    decade_start: (u32, BackpackStats),
    summaries: Vec<RoundSummary>,
}

impl Session {
    /// Validate `config`, install `kind` and start the first decade.
    pub fn new(config: SimConfig, kind: StrategyKind) -> Result<Self> {
        config.validate()?;
        let rng = SplitMix64::new(config.seed);
        let world = World {
            forager: Forager::new(config.max_weight),
            ..World::default()
        };
        let mut session = Self {
            config,
            world,
            controller: DecisionController::with_kind(kind),
            rng,
            next_id: 0,
            accumulator: 0.0,
            decade_start: (0, BackpackStats::default()),
            summaries: Vec::new(),
        };
        session.start_next_decade()?;
        Ok(session)
    }

    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.controller = self.controller.with_trace_sink(sink);
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn controller(&self) -> &DecisionController {
        &self.controller
    }

    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    pub fn is_over(&self) -> bool {
        !self.world.clock.is_running()
    }

    /// Regenerate the field, recentre the agent, refill the timer and unpause.
    pub fn start_next_decade(&mut self) -> Result<()> {
        if let Some(reason) = self.world.clock.game_over() {
            return Err(SimError::GameOver(reason));
        }

        self.world.field = Field::generate(&self.config, &mut self.rng, self.next_id);
        self.next_id += self.world.field.len() as u64;
        self.world.forager.reset_position();
        self.world.clock.start_decade(&self.config);
        self.accumulator = 0.0;
        self.decade_start = (self.world.clock.age(), self.world.forager.stats);

        tracing::info!(
            age = self.world.clock.age(),
            until = self.world.clock.age() + self.config.age_step,
            strategy = self.controller.strategy_name(),
            items = self.world.field.len(),
            "decade started"
        );
        Ok(())
    }

    /// Between-decade choice: install the named strategy and start the next decade.
    ///
    /// An unknown name keeps the current strategy; the decade starts either way.
    pub fn select_strategy(&mut self, name: &str) -> Result<()> {
        if let Some(reason) = self.world.clock.game_over() {
            return Err(SimError::GameOver(reason));
        }
        let _ = self.controller.set_strategy_by_name(name);
        self.start_next_decade()
    }

    /// One variable-rate tick of `dt` seconds: decide, move in fixed steps, collect, then
    /// advance the clock.
    pub fn advance(&mut self, dt: f32) -> ClockEvent {
        self.step(dt).0
    }

    /// Like [`Session::advance`], also handing back the summary of a decade that just closed.
    fn step(&mut self, dt: f32) -> (ClockEvent, Option<RoundSummary>) {
        self.controller.tick(dt, &mut self.world);

        if !self.world.is_suspended() {
            self.accumulator += dt.max(0.0);
            while self.accumulator >= self.config.fixed_dt {
                self.accumulator -= self.config.fixed_dt;
                self.fixed_step();
            }
        }

        let event = self.world.clock.advance(
            &self.config,
            dt,
            self.world.forager.stats.stress,
        );
        let closed = match event {
            ClockEvent::DecadeEnded { .. } => Some(self.close_decade(DecadeOutcome::Completed)),
            ClockEvent::GameOver(reason) => {
                Some(self.close_decade(DecadeOutcome::GameOver { reason }))
            }
            ClockEvent::Idle | ClockEvent::Ticking => None,
        };
        (event, closed)
    }

    fn fixed_step(&mut self) {
        let World { field, forager, .. } = &mut self.world;
        forager.step(&self.config, self.config.fixed_dt);
        for item in field.collect_near(forager.position, self.config.pickup_radius) {
            tracing::debug!(
                id = %item.candidate.id,
                name = %item.name,
                value = item.candidate.value,
                "item collected"
            );
            forager.add_to_backpack(item);
        }
    }

    fn close_decade(&mut self, outcome: DecadeOutcome) -> RoundSummary {
        self.world.forager.control = Vec2::ZERO;

        let (age_from, start) = self.decade_start;
        let totals = self.world.forager.stats;
        let summary = RoundSummary {
            strategy: self.controller.strategy_name().to_string(),
            age_from,
            age_to: self.world.clock.age(),
            gained: BackpackStats {
                value: totals.value.saturating_sub(start.value),
                weight: totals.weight.saturating_sub(start.weight),
                stress: totals.stress.saturating_sub(start.stress),
                items: totals.items.saturating_sub(start.items),
            },
            totals,
            outcome,
        };
        tracing::info!(
            age = summary.age_to,
            value = summary.gained.value,
            items = summary.gained.items,
            "decade ended"
        );
        self.summaries.push(summary.clone());
        summary
    }

    /// Tick at a constant `dt` until the current decade ends, starting the next decade first
    /// if the clock is paused between decades.
    pub fn run_decade(&mut self, dt: f32) -> Result<RoundSummary> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTick(dt));
        }
        if self.world.clock.is_paused() {
            self.start_next_decade()?;
        }

        for _ in 0..MAX_TICKS_PER_DECADE {
            if let (_, Some(summary)) = self.step(dt) {
                return Ok(summary);
            }
        }
        Err(SimError::Stalled {
            ticks: MAX_TICKS_PER_DECADE,
        })
    }

    /// Run decades back to back with the current strategy until the round is over or
    /// `max_decades` have been played.
    pub fn run(&mut self, dt: f32, max_decades: u32) -> Result<&[RoundSummary]> {
        for _ in 0..max_decades {
            if self.is_over() {
                break;
            }
            self.run_decade(dt)?;
        }
        Ok(&self.summaries)
    }
}
