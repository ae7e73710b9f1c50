//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! A unit entity carries: `UnitId`, `Team`, `UnitStats`, `GridPos`,
//! `Health`, `Cooldown`, and `Intent`.

use serde::{Deserialize, Serialize};

use crate::enums::Action;
use crate::types::UnitId;

/// Remaining hit points. May drop to zero or below; the unit is dead then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i64,
    pub max: u32,
}

/// Attack cooldown timer in ticks. Zero means ready to strike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    pub timer: u32,
}

/// The unit's decision from its latest turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub action: Action,
    /// Weak reference to the current target, resolved against the roster on read.
    pub target: Option<UnitId>,
}
