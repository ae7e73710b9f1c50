//! Validation errors for unit configuration.

use thiserror::Error;

/// A unit stat profile that the engine refuses to simulate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("max health must be positive")]
    ZeroHealth,

    #[error("attack power must be positive")]
    ZeroAttack,

    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(i32),

    #[error("attack range must be a positive finite distance, got {0}")]
    InvalidAttackRange(f64),

    #[error("vision range must be a positive finite distance, got {0}")]
    InvalidVisionRange(f64),

    #[error("attack cooldown must be at least one tick")]
    ZeroCooldown,
}
