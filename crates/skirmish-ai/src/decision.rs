//! Per-unit combat decision state machine.
//!
//! Pure functions evaluated fresh every tick from the unit's range, cooldown,
//! and the nearest sighted enemy. No ECS dependency; operates on plain data.

use glam::IVec2;

use skirmish_core::enums::Action;
use skirmish_core::types::{GridPos, UnitStats};

use crate::movement::approach_step;

/// The nearest living enemy as seen by a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub position: GridPos,
    pub distance: f64,
}

/// Input to the decision FSM for a single unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext {
    pub position: GridPos,
    pub stats: UnitStats,
    pub cooldown_timer: u32,
    pub enemy: Option<Sighting>,
}

/// Output from the decision FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Nothing in sight: take a random orthogonal step and drop the target.
    Wander,
    /// Close in on the target by `step`.
    Advance { step: IVec2 },
    /// Hit the target now and restart the cooldown.
    Strike,
    /// Target in range but the weapon is cooling down.
    Hold,
}

impl Decision {
    /// The action reported for this decision.
    pub fn action(&self) -> Action {
        match self {
            Decision::Wander => Action::Idle,
            Decision::Advance { .. } => Action::Moving,
            Decision::Strike => Action::Attacking,
            Decision::Hold => Action::Waiting,
        }
    }

    /// Whether the unit keeps its target after this decision.
    pub fn keeps_target(&self) -> bool {
        !matches!(self, Decision::Wander)
    }
}

/// Evaluate the FSM for one unit.
pub fn evaluate(ctx: &UnitContext) -> Decision {
    let Some(enemy) = ctx.enemy else {
        return Decision::Wander;
    };

    if enemy.distance <= ctx.stats.attack_range {
        if ctx.cooldown_timer == 0 {
            Decision::Strike
        } else {
            Decision::Hold
        }
    } else if enemy.distance <= ctx.stats.vision_range {
        Decision::Advance {
            step: approach_step(ctx.position, enemy.position, ctx.stats.speed),
        }
    } else {
        Decision::Wander
    }
}

/// Cooldown timer value right after a strike. The end-of-turn decay brings
/// it down to `cooldown` before the next tick starts.
pub fn rearmed_timer(stats: &UnitStats) -> u32 {
    stats.cooldown + 1
}

/// End-of-turn cooldown decay.
pub fn decay_timer(timer: u32) -> u32 {
    timer.saturating_sub(1)
}
