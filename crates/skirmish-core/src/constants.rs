//! Simulation constants and tuning parameters.

use glam::IVec2;

use crate::enums::UnitKind;
use crate::types::UnitStats;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Board ---

pub const DEFAULT_BOARD_WIDTH: u32 = 100;
pub const DEFAULT_BOARD_HEIGHT: u32 = 100;

// --- Run loop ---

/// Ticks of unchanged team counts before a run is declared stagnant.
pub const DEFAULT_STAGNATION_THRESHOLD: usize = 150;

// --- Movement ---

/// Idle wander directions, indexed by a uniform draw in `0..4`.
pub const WANDER_DIRECTIONS: [IVec2; 4] = [IVec2::X, IVec2::Y, IVec2::NEG_X, IVec2::NEG_Y];

// --- Battle presets ---

/// Units per team in the random battle preset.
pub const DEFAULT_UNITS_PER_TEAM: usize = 20;

/// Units per team suggested for a custom battle.
pub const DEFAULT_CUSTOM_UNITS_PER_TEAM: usize = 15;

/// Largest team the random battle preset will generate.
pub const MAX_UNITS_PER_TEAM: usize = 10_000;

// --- Unit profiles ---

/// Melee infantry: tough, slow, must close to adjacent cells.
pub const BARBARIAN: UnitStats = UnitStats {
    kind: UnitKind::Barbarian,
    max_health: 100,
    attack: 20,
    speed: 1,
    attack_range: 1.0,
    vision_range: 100.0,
    cooldown: 2,
};

/// Ranged skirmisher: fragile, fast, hits from distance.
pub const ARCHER: UnitStats = UnitStats {
    kind: UnitKind::Archer,
    max_health: 80,
    attack: 30,
    speed: 2,
    attack_range: 10.0,
    vision_range: 100.0,
    cooldown: 3,
};
