//! Headless foraging round.
//!
//! A [`Session`] owns the field, the [`Forager`], the decade clock and a
//! [`DecisionController`](forage_controller::DecisionController). Each call to
//! [`Session::advance`] runs one variable-rate decision tick, integrates movement in fixed
//! steps, collects items within reach, and advances the clock.
//!
//! ```no_run
//! use forage_sim::{Session, SimConfig};
//! use forage_strategies::StrategyKind;
//!
//! let mut session = Session::new(SimConfig::default(), StrategyKind::Dp)?;
//! let summary = session.run_decade(1.0 / 60.0)?;
//! println!("collected {} value", summary.gained.value);
//! # Ok::<(), forage_sim::SimError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod field;
pub mod forager;
pub mod rng;
pub mod round;
pub mod session;

pub use config::{ItemTemplate, SimConfig};
pub use error::{Result, SimError};
pub use field::{Field, FieldItem, Rect};
pub use forager::{BackpackStats, Forager};
pub use rng::{DeterministicRng, SplitMix64};
pub use round::{ClockEvent, GameOverReason, RoundClock};
pub use session::{DecadeOutcome, RoundSummary, Session, World, MAX_TICKS_PER_DECADE};
