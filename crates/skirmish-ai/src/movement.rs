//! Grid step math.

use glam::IVec2;

use skirmish_core::constants::WANDER_DIRECTIONS;
use skirmish_core::enums::Axis;
use skirmish_core::types::GridPos;

/// Step toward `to`, moving `speed` cells on both axes at once.
///
/// An axis with positive displacement moves by `+speed`; every other axis,
/// including one already aligned with the target, moves by `-speed`.
pub fn approach_step(from: GridPos, to: GridPos, speed: i32) -> IVec2 {
    let delta = to.0 - from.0;
    IVec2::new(
        if delta.x > 0 { speed } else { -speed },
        if delta.y > 0 { speed } else { -speed },
    )
}

/// Idle wander step for a direction index in `0..4`.
pub fn wander_step(direction: usize, speed: i32) -> IVec2 {
    WANDER_DIRECTIONS[direction % WANDER_DIRECTIONS.len()] * speed
}

/// Shift `candidate` one cell along `axis` toward `origin`.
///
/// Moves `+1` when the origin coordinate is greater, `-1` otherwise
/// (including when the coordinates already match).
pub fn nudge_toward(candidate: GridPos, origin: GridPos, axis: Axis) -> GridPos {
    let toward = |from: i32, to: i32| if to > from { 1 } else { -1 };
    match axis {
        Axis::X => candidate.offset(IVec2::new(toward(candidate.x(), origin.x()), 0)),
        Axis::Y => candidate.offset(IVec2::new(0, toward(candidate.y(), origin.y()))),
    }
}
