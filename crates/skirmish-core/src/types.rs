//! Fundamental grid and simulation types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Team, UnitKind};
use crate::error::StatsError;

/// Integer cell coordinate on the battlefield. The grid is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos(pub IVec2);

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Euclidean distance to another cell.
    pub fn distance_to(&self, other: &GridPos) -> f64 {
        (other.0 - self.0).as_dvec2().length()
    }

    /// This cell shifted by `step`.
    pub fn offset(&self, step: IVec2) -> GridPos {
        GridPos(self.0 + step)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Stable identity of a unit. Assigned once by the engine and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Static combat profile of a unit. Immutable once the unit is registered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    /// Unit-type tag, carried through to snapshots.
    pub kind: UnitKind,
    pub max_health: u32,
    /// Damage dealt per successful attack.
    pub attack: u32,
    /// Cells moved per tick on each axis.
    pub speed: i32,
    /// Maximum Euclidean distance at which the unit can strike.
    pub attack_range: f64,
    /// Maximum Euclidean distance at which the unit notices an enemy.
    pub vision_range: f64,
    /// Ticks between attacks.
    pub cooldown: u32,
}

impl UnitStats {
    /// Reject profiles the engine cannot simulate meaningfully.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.max_health == 0 {
            return Err(StatsError::ZeroHealth);
        }
        if self.attack == 0 {
            return Err(StatsError::ZeroAttack);
        }
        if self.speed <= 0 {
            return Err(StatsError::NonPositiveSpeed(self.speed));
        }
        if !self.attack_range.is_finite() || self.attack_range <= 0.0 {
            return Err(StatsError::InvalidAttackRange(self.attack_range));
        }
        if !self.vision_range.is_finite() || self.vision_range <= 0.0 {
            return Err(StatsError::InvalidVisionRange(self.vision_range));
        }
        if self.cooldown == 0 {
            return Err(StatsError::ZeroCooldown);
        }
        Ok(())
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks completed.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Board dimensions in cells. Only used by collaborators for scaling and by
/// battle presets for initial placement; movement is never bounded by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u32,
    pub height: u32,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_BOARD_WIDTH,
            height: crate::constants::DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Number of active units per team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamCounts {
    pub blue: usize,
    pub red: usize,
}

impl TeamCounts {
    pub fn new(blue: usize, red: usize) -> Self {
        Self { blue, red }
    }

    /// The winning team once one side is empty.
    ///
    /// When both sides are empty at once, Red is reported as the winner.
    pub fn victor(&self) -> Option<Team> {
        if self.blue > 0 && self.red > 0 {
            return None;
        }
        if self.blue > 0 {
            Some(Team::Blue)
        } else {
            Some(Team::Red)
        }
    }
}
