//! Cleanup system: sweeps dead units out of the world before decisions run.

use std::collections::HashMap;

use hecs::{Entity, World};

use skirmish_core::components::Health;
use skirmish_core::types::UnitId;

/// Despawn every roster unit with health at or below zero, keeping the
/// roster order of the survivors. Returns the number of units removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    index: &mut HashMap<UnitId, Entity>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    for &entity in roster.iter() {
        let dead = world
            .get::<&Health>(entity)
            .map(|health| health.current <= 0)
            .unwrap_or(true);
        if dead {
            despawn_buffer.push(entity);
        }
    }

    if despawn_buffer.is_empty() {
        return 0;
    }

    roster.retain(|entity| !despawn_buffer.contains(entity));

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        if let Ok(id) = world.get::<&UnitId>(entity).map(|id| *id) {
            index.remove(&id);
        }
        let _ = world.despawn(entity);
    }
    removed
}
