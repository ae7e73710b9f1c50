//! Battle setup presets.
//!
//! Each preset produces a list of deployments (stats, cell, team) that the
//! engine registers in order. Blue deploys first, then Red.

use rand::Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{ARCHER, BARBARIAN, DEFAULT_UNITS_PER_TEAM, MAX_UNITS_PER_TEAM};
use skirmish_core::enums::Team;
use skirmish_core::types::{BoardSize, GridPos, UnitStats};

use crate::error::{Result, SimError};

/// A unit waiting to be registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deployment {
    pub stats: UnitStats,
    pub position: GridPos,
    pub team: Team,
}

/// Available battle setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattlePreset {
    /// Mixed barbarians and archers scattered over the whole board.
    Random { per_team: usize },
    /// Organized armies: a barbarian front line screening an archer back line.
    Formation,
    /// Many barbarians on the left against few archers on the right.
    Asymmetric,
}

impl Default for BattlePreset {
    fn default() -> Self {
        BattlePreset::Random {
            per_team: DEFAULT_UNITS_PER_TEAM,
        }
    }
}

/// Build the deployments for a preset on the given board.
pub fn build(
    preset: BattlePreset,
    board: BoardSize,
    rng: &mut impl Rng,
) -> Result<Vec<Deployment>> {
    if board.width == 0 || board.height == 0 {
        return Err(SimError::InvalidBoard {
            width: board.width,
            height: board.height,
        });
    }
    if let BattlePreset::Random { per_team } = preset {
        if per_team > MAX_UNITS_PER_TEAM {
            return Err(SimError::TooManyUnits {
                requested: per_team,
                max: MAX_UNITS_PER_TEAM,
            });
        }
    }

    let deployments = match preset {
        BattlePreset::Random { per_team } => build_random(board, per_team, rng),
        BattlePreset::Formation => build_formation(),
        BattlePreset::Asymmetric => build_asymmetric(board, rng),
    };
    Ok(deployments)
}

/// Random battle: each unit is a coin-flip between barbarian and archer,
/// placed anywhere on the board.
fn build_random(board: BoardSize, per_team: usize, rng: &mut impl Rng) -> Vec<Deployment> {
    let mut deployments = Vec::with_capacity(per_team * 2);
    for team in [Team::Blue, Team::Red] {
        for _ in 0..per_team {
            let stats = if rng.gen_bool(0.5) { BARBARIAN } else { ARCHER };
            let position = random_cell(rng, 0..board.width, 0..board.height);
            deployments.push(Deployment {
                stats,
                position,
                team,
            });
        }
    }
    deployments
}

/// Formation battle on fixed coordinates (sized for the default 100x100 board).
/// Blue: 10 barbarians at x=20, 8 archers at x=10. Red mirrors at x=80 / x=90.
fn build_formation() -> Vec<Deployment> {
    let mut deployments = Vec::with_capacity(36);
    for (team, front_x, back_x) in [(Team::Blue, 20, 10), (Team::Red, 80, 90)] {
        for i in 0..10 {
            deployments.push(Deployment {
                stats: BARBARIAN,
                position: GridPos::new(front_x, 30 + i * 4),
                team,
            });
        }
        for i in 0..8 {
            deployments.push(Deployment {
                stats: ARCHER,
                position: GridPos::new(back_x, 32 + i * 5),
                team,
            });
        }
    }
    deployments
}

/// Asymmetric battle: 25 Blue barbarians in the left 30% of the board,
/// 10 Red archers in the right 30%.
fn build_asymmetric(board: BoardSize, rng: &mut impl Rng) -> Vec<Deployment> {
    let left_edge = tenths_of(board.width, 3);
    let right_edge = tenths_of(board.width, 7).min(board.width - 1);

    let mut deployments = Vec::with_capacity(35);
    for _ in 0..25 {
        deployments.push(Deployment {
            stats: BARBARIAN,
            position: random_cell(rng, 0..left_edge + 1, 0..board.height),
            team: Team::Blue,
        });
    }
    for _ in 0..10 {
        deployments.push(Deployment {
            stats: ARCHER,
            position: random_cell(rng, right_edge..board.width, 0..board.height),
            team: Team::Red,
        });
    }
    deployments
}

/// `value * tenths / 10`, rounded down, without overflowing for large boards.
fn tenths_of(value: u32, tenths: u32) -> u32 {
    value / 10 * tenths + value % 10 * tenths / 10
}

fn random_cell(rng: &mut impl Rng, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> GridPos {
    let x = rng.gen_range(xs);
    let y = rng.gen_range(ys);
    GridPos::new(clamp_to_i32(x), clamp_to_i32(y))
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
