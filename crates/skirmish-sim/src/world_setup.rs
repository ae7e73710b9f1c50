//! Entity spawn factories for setting up the battle world.

use hecs::{Entity, World};

use skirmish_core::components::{Cooldown, Health, Intent};
use skirmish_core::enums::Team;
use skirmish_core::types::{GridPos, UnitId, UnitStats};

/// Spawn a unit at full health, weapon ready, with no target.
/// Stats must already be validated.
pub fn spawn_unit(
    world: &mut World,
    id: UnitId,
    stats: UnitStats,
    position: GridPos,
    team: Team,
) -> Entity {
    world.spawn((
        id,
        team,
        stats,
        position,
        Health {
            current: i64::from(stats.max_health),
            max: stats.max_health,
        },
        Cooldown::default(),
        Intent::default(),
    ))
}
