//! Combat system: the per-unit decision pass.
//!
//! Units act one at a time in roster order. Each turn runs targeting, the
//! decision FSM, damage, movement, collision resolution, and cooldown decay
//! before the next unit acts, so damage and movement are visible to every
//! later unit in the same tick.

use glam::IVec2;
use hecs::{Entity, World};

use skirmish_ai::decision::{self, Decision, Sighting, UnitContext};
use skirmish_ai::movement::wander_step;
use skirmish_core::components::{Cooldown, Health, Intent};
use skirmish_core::constants::WANDER_DIRECTIONS;
use skirmish_core::enums::Team;
use skirmish_core::types::{GridPos, UnitId, UnitStats};

use crate::random::RandomSource;
use crate::systems::collision::{self, OccupiedCells};
use crate::systems::targeting;

/// Run one decision pass over the whole roster.
pub fn run(world: &mut World, roster: &[Entity], rng: &mut dyn RandomSource) {
    let mut occupied = OccupiedCells::with_capacity(roster.len());
    for &entity in roster {
        take_turn(world, roster, entity, rng, &mut occupied);
    }
}

fn take_turn(
    world: &mut World,
    roster: &[Entity],
    entity: Entity,
    rng: &mut dyn RandomSource,
    occupied: &mut OccupiedCells,
) {
    let Ok((id, team, stats, origin, cooldown)) = world
        .query_one_mut::<(&UnitId, &Team, &UnitStats, &GridPos, &Cooldown)>(entity)
        .map(|(id, team, stats, pos, cooldown)| (*id, *team, *stats, *pos, cooldown.timer))
    else {
        debug_assert!(false, "roster entity {entity:?} is missing unit components");
        return;
    };

    let target = targeting::nearest_enemy(world, roster, origin, team);
    let decision = decision::evaluate(&UnitContext {
        position: origin,
        stats,
        cooldown_timer: cooldown,
        enemy: target.map(|t| Sighting {
            position: t.position,
            distance: t.distance,
        }),
    });

    let mut timer = cooldown;
    let step = match decision {
        Decision::Wander => wander_step(rng.next_index(WANDER_DIRECTIONS.len()), stats.speed),
        Decision::Advance { step } => step,
        Decision::Strike => {
            if let Some(target) = target {
                strike(world, target.entity, stats.attack);
            }
            timer = decision::rearmed_timer(&stats);
            IVec2::ZERO
        }
        Decision::Hold => IVec2::ZERO,
    };

    let settled = collision::resolve(origin.offset(step), origin, occupied, rng);
    let intent = Intent {
        action: decision.action(),
        target: target.filter(|_| decision.keeps_target()).map(|t| t.id),
    };

    tracing::trace!(unit = id.0, ?decision, from = ?origin, to = ?settled, "unit turn");

    if let Ok((position, cooldown, current)) =
        world.query_one_mut::<(&mut GridPos, &mut Cooldown, &mut Intent)>(entity)
    {
        *position = settled;
        cooldown.timer = decision::decay_timer(timer);
        *current = intent;
    }
}

/// Apply damage immediately. Only the victim's health changes.
fn strike(world: &mut World, victim: Entity, attack: u32) {
    if let Ok(mut health) = world.get::<&mut Health>(victim) {
        health.current -= i64::from(attack);
    }
}
