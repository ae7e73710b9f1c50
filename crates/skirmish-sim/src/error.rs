//! Engine error types.

use thiserror::Error;

use skirmish_core::error::StatsError;

/// Configuration rejected by the engine. Internal-consistency faults are
/// assertions, not variants here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid unit stats: {0}")]
    InvalidStats(#[from] StatsError),

    #[error("invalid run configuration: {0}")]
    InvalidRunConfig(String),

    #[error("invalid board {width}x{height}: both dimensions must be positive")]
    InvalidBoard { width: u32, height: u32 },

    #[error("{requested} units per team requested, at most {max} allowed")]
    TooManyUnits { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
