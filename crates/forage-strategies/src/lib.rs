//! Foraging decision strategies.
//!
//! Every strategy implements [`forage_core::Strategy`]. Heuristic policies ([`ManualStrategy`],
//! [`GreedyStrategy`], [`BacktrackStrategy`]) decide from the current tick alone;
//! [`DpStrategy`] runs a bounded-depth lookahead over future pickups and caches its choice
//! between throttled recomputations. Tie-breaking is always stable by candidate order.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod backtrack;
pub mod dp;
pub mod greedy;
pub mod kind;
pub mod manual;
pub mod search;

pub use backtrack::{BacktrackConfig, BacktrackStrategy};
pub use dp::DpStrategy;
pub use greedy::{GreedyStrategy, MIN_SCORE_DISTANCE};
pub use kind::{StrategyKind, UnknownStrategy};
pub use manual::ManualStrategy;
pub use search::{find_best_path, score_of, travel_time, DpConfig, VisitedSet};
