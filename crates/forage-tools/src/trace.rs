use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use forage_core::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One controller-level observation.
///
/// Plain data so it can be recorded during a run and rendered by tooling afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceEvent {
    /// The round was suspended; the control signal was forced to zero.
    Suspended { tick: u64 },
    /// The active strategy produced a direction.
    Decision {
        tick: u64,
        strategy: Cow<'static, str>,
        live_candidates: u32,
        direction: Vec2,
    },
    StrategyChanged {
        tick: u64,
        from: Cow<'static, str>,
        to: Cow<'static, str>,
    },
    /// A name lookup missed; the active strategy was kept.
    UnknownStrategy { tick: u64, name: String },
}

impl TraceEvent {
    pub fn tick(&self) -> u64 {
        match self {
            TraceEvent::Suspended { tick }
            | TraceEvent::Decision { tick, .. }
            | TraceEvent::StrategyChanged { tick, .. }
            | TraceEvent::UnknownStrategy { tick, .. } => *tick,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TraceEvent::Suspended { .. } => "controller.suspended",
            TraceEvent::Decision { .. } => "controller.decision",
            TraceEvent::StrategyChanged { .. } => "controller.strategy_changed",
            TraceEvent::UnknownStrategy { .. } => "controller.unknown_strategy",
        }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn count(&self, tag: &str) -> usize {
        self.events.iter().filter(|e| e.tag() == tag).count()
    }

    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }
}

/// Cloneable handle to a [`TraceLog`]: hand one clone to the controller as a sink and keep
/// another to read the events back.
#[derive(Debug, Default, Clone)]
pub struct SharedTraceLog {
    inner: Rc<RefCell<TraceLog>>,
}

impl SharedTraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TraceLog {
        self.inner.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().events.clear();
    }
}

impl TraceSink for SharedTraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.inner.borrow_mut().push(event);
    }
}
