//! Targeting: find the nearest living enemy of a unit.

use hecs::{Entity, World};

use skirmish_core::components::Health;
use skirmish_core::enums::Team;
use skirmish_core::types::{GridPos, UnitId};

/// The chosen enemy and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub entity: Entity,
    pub id: UnitId,
    pub position: GridPos,
    pub distance: f64,
}

/// Nearest living unit of the opposing team, by Euclidean distance.
///
/// Ties go to the unit met first in roster order. A unit standing on the
/// very same cell is never chosen.
pub fn nearest_enemy(
    world: &World,
    roster: &[Entity],
    from: GridPos,
    team: Team,
) -> Option<Target> {
    let mut best: Option<Target> = None;

    for &entity in roster {
        let Ok(mut query) = world.query_one::<(&UnitId, &GridPos, &Team, &Health)>(entity) else {
            continue;
        };
        let Some((id, position, other_team, health)) = query.get() else {
            continue;
        };
        if *other_team == team || health.current <= 0 {
            continue;
        }

        let distance = from.distance_to(position);
        if distance <= 0.0 {
            continue;
        }
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Target {
                entity,
                id: *id,
                position: *position,
                distance,
            });
        }
    }

    best
}
