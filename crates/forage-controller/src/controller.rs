use forage_core::{Strategy, TickContext, Vec2};
use forage_strategies::{ManualStrategy, StrategyKind, UnknownStrategy};
use forage_tools::{TraceEvent, TraceSink};

use crate::DecisionWorld;

pub struct DecisionController {
    strategy: Box<dyn Strategy>,
    tick: u64,
    last_direction: Vec2,
    trace: Option<Box<dyn TraceSink>>,
}

impl Default for DecisionController {
    fn default() -> Self {
        Self::new(Box::new(ManualStrategy::new()))
    }
}

impl DecisionController {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            tick: 0,
            last_direction: Vec2::ZERO,
            trace: None,
        }
    }

    pub fn with_kind(kind: StrategyKind) -> Self {
        Self::new(kind.build())
    }

    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    /// Display name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Number of ticks seen so far, including suspended ones.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Direction written on the most recent tick.
    pub fn last_direction(&self) -> Vec2 {
        self.last_direction
    }

    /// Replace the active strategy. The previous instance and all its state are dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        let from = self.strategy.name();
        self.strategy = strategy;
        let to = self.strategy.name();

        tracing::info!(from, to, "strategy switched");
        self.emit(TraceEvent::StrategyChanged {
            tick: self.tick,
            from: from.into(),
            to: to.into(),
        });
    }

    /// Install a fresh instance of the named strategy.
    ///
    /// An unknown name leaves the active strategy untouched and is reported as an error.
    pub fn set_strategy_by_name(&mut self, name: &str) -> Result<StrategyKind, UnknownStrategy> {
        match name.parse::<StrategyKind>() {
            Ok(kind) => {
                self.set_strategy(kind.build());
                Ok(kind)
            }
            Err(err) => {
                tracing::warn!(
                    name,
                    active = self.strategy.name(),
                    "ignoring unknown strategy name"
                );
                self.emit(TraceEvent::UnknownStrategy {
                    tick: self.tick,
                    name: name.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Run one variable-rate tick and return the direction written to the control signal.
    ///
    /// While the round is suspended the control signal is forced to zero and the strategy is
    /// not called, so its timers and caches do not advance.
    pub fn tick<W>(&mut self, dt_seconds: f32, world: &mut W) -> Vec2
    where
        W: DecisionWorld + ?Sized,
    {
        let tick = self.tick;
        self.tick = self.tick.saturating_add(1);

        if world.is_suspended() {
            world.set_control(Vec2::ZERO);
            self.last_direction = Vec2::ZERO;
            self.emit(TraceEvent::Suspended { tick });
            return Vec2::ZERO;
        }

        let ctx = TickContext::new(tick, dt_seconds).with_input(world.input_axes());
        let agent = world.agent_snapshot();
        let candidates = world.candidates();
        let live_candidates = candidates.iter().filter(|c| c.active).count() as u32;

        let direction = self.strategy.calculate_move(&ctx, &agent, candidates);

        world.set_control(direction);
        self.last_direction = direction;
        self.emit(TraceEvent::Decision {
            tick,
            strategy: self.strategy.name().into(),
            live_candidates,
            direction,
        });
        direction
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(event);
        }
    }
}
