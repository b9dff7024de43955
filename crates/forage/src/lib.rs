//! Umbrella crate that re-exports the `forage-*` building blocks.
//!
//! - [`core`]: geometry, candidate and agent snapshots, the `Strategy` trait
//! - [`strategies`]: Manual, Greedy, Backtrack and the DP lookahead
//! - [`controller`]: the per-tick decision controller
//! - [`tools`]: decision tracing
//! - [`sim`]: a headless round for running strategies end to end

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use forage_core as core;

#[cfg(feature = "strategies")]
#[cfg_attr(docsrs, doc(cfg(feature = "strategies")))]
pub use forage_strategies as strategies;

#[cfg(feature = "controller")]
#[cfg_attr(docsrs, doc(cfg(feature = "controller")))]
pub use forage_controller as controller;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use forage_tools as tools;

#[cfg(feature = "sim")]
#[cfg_attr(docsrs, doc(cfg(feature = "sim")))]
pub use forage_sim as sim;
