//! Deterministic, engine-agnostic primitives for foraging decision strategies.
//!
//! Everything here is plain data plus the [`Strategy`] contract. Concrete policies live in
//! `forage-strategies`; the per-tick driver lives in `forage-controller`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod candidate;
pub mod math;
pub mod strategy;
pub mod tick;

pub use agent::{AgentSnapshot, SimulatedState};
pub use candidate::{Candidate, CandidateId};
pub use math::{clamp01, lerp, Vec2};
pub use strategy::{direction_to, Strategy};
pub use tick::TickContext;
