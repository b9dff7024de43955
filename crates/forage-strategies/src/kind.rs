use core::fmt;
use core::str::FromStr;

use forage_core::Strategy;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BacktrackStrategy, DpStrategy, GreedyStrategy, ManualStrategy};

/// Closed set of selectable strategies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    Manual,
    Greedy,
    Backtrack,
    #[cfg_attr(feature = "serde", serde(rename = "DP"))]
    Dp,
}

/// A strategy name outside the fixed lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy name: {0:?} (expected one of Manual, Greedy, Backtrack, DP)")]
pub struct UnknownStrategy(pub String);

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Manual,
        StrategyKind::Greedy,
        StrategyKind::Backtrack,
        StrategyKind::Dp,
    ];

    /// Lookup name, identical to the built strategy's [`Strategy::name`].
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Manual => "Manual",
            StrategyKind::Greedy => "Greedy",
            StrategyKind::Backtrack => "Backtrack",
            StrategyKind::Dp => "DP",
        }
    }

    /// Longer label for menus.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Manual => "Free exploration (manual)",
            StrategyKind::Greedy => "Greedy intuition (AI)",
            StrategyKind::Backtrack => "Perfectionist (AI)",
            StrategyKind::Dp => "Utilitarian planner (AI)",
        }
    }

    pub fn is_autonomous(self) -> bool {
        !matches!(self, StrategyKind::Manual)
    }

    /// Fresh instance with default configuration.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Manual => Box::new(ManualStrategy::new()),
            StrategyKind::Greedy => Box::new(GreedyStrategy::new()),
            StrategyKind::Backtrack => Box::new(BacktrackStrategy::new()),
            StrategyKind::Dp => Box::new(DpStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    /// Exact, case-sensitive match against [`StrategyKind::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
