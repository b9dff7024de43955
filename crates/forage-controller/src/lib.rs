//! Tick driver for foraging strategies.
//!
//! [`DecisionController`] owns exactly one active strategy. Each tick it reads the round state,
//! the candidates and the agent from a [`DecisionWorld`], runs the strategy, and writes the
//! resulting direction to the agent's control signal.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod controller;
pub mod world;

pub use controller::DecisionController;
pub use world::{AgentSource, CandidateSource, ControlSink, DecisionWorld, InputSource, RoundState};
