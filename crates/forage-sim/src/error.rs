use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read config from {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("tick length must be a positive number of seconds, got {0}")]
    InvalidTick(f32),

    #[error("decade did not finish within {ticks} ticks")]
    Stalled { ticks: u64 },

    #[error("the round is over ({0}); no further decades can start")]
    GameOver(crate::round::GameOverReason),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
