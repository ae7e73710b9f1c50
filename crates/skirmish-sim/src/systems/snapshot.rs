//! Snapshot system: queries the world and builds a complete BattleSnapshot.
//!
//! This system is read-only. It never modifies the world.

use std::collections::HashMap;

use hecs::{Entity, World};

use skirmish_core::components::{Cooldown, Health, Intent};
use skirmish_core::enums::*;
use skirmish_core::state::*;
use skirmish_core::types::{BoardSize, GridPos, SimTime, UnitId, UnitStats};

/// Build a complete BattleSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    index: &HashMap<UnitId, Entity>,
    time: &SimTime,
    board: BoardSize,
) -> BattleSnapshot {
    BattleSnapshot {
        tick: time.tick,
        board,
        units: build_units(world, roster),
        engagements: build_engagements(world, roster, index),
    }
}

/// Build UnitView list in roster order.
fn build_units(world: &World, roster: &[Entity]) -> Vec<UnitView> {
    roster
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&UnitId, &GridPos, &Team, &Health, &UnitStats)>(entity)
                .ok()?;
            let (id, position, team, health, stats) = query.get()?;
            Some(UnitView {
                id: *id,
                position: *position,
                team: *team,
                health_ratio: health.current as f64 / f64::from(health.max),
                kind: stats.kind,
                alive: health.current > 0,
            })
        })
        .collect()
}

/// Build EngagementView list for units pursuing or fighting a target that
/// is still on the roster.
fn build_engagements(
    world: &World,
    roster: &[Entity],
    index: &HashMap<UnitId, Entity>,
) -> Vec<EngagementView> {
    roster
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&UnitId, &GridPos, &Intent)>(entity).ok()?;
            let (id, position, intent) = query.get()?;
            if intent.action == Action::Idle {
                return None;
            }
            let target_id = intent.target?;
            let target_entity = *index.get(&target_id)?;
            let target_position = *world.get::<&GridPos>(target_entity).ok()?;

            let color = match intent.action {
                Action::Moving => EngagementColor::Yellow,
                _ => EngagementColor::Red,
            };
            let stroke = match intent.action {
                Action::Waiting => StrokeStyle::Dotted,
                _ => StrokeStyle::Solid,
            };

            Some(EngagementView {
                source: *id,
                target: target_id,
                source_position: *position,
                target_position,
                color,
                stroke,
            })
        })
        .collect()
}

/// Detailed state of one unit, if it is still on the roster.
pub fn unit_status(world: &World, entity: Entity) -> Option<UnitStatus> {
    let mut query = world
        .query_one::<(
            &UnitId,
            &Team,
            &UnitStats,
            &GridPos,
            &Health,
            &Cooldown,
            &Intent,
        )>(entity)
        .ok()?;
    let (id, team, stats, position, health, cooldown, intent) = query.get()?;
    Some(UnitStatus {
        id: *id,
        team: *team,
        kind: stats.kind,
        position: *position,
        health: health.current,
        cooldown_timer: cooldown.timer,
        action: intent.action,
        target: intent.target,
    })
}
