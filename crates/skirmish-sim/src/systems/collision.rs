//! Collision resolution: best-effort de-overlap of units after movement.
//!
//! Order-dependent by construction. Each unit is checked against the cells
//! claimed by units resolved before it in the same pass.

use std::collections::HashSet;

use skirmish_ai::movement::nudge_toward;
use skirmish_core::enums::Axis;
use skirmish_core::types::GridPos;

use crate::random::RandomSource;

/// Cells claimed so far this tick.
#[derive(Debug, Default)]
pub struct OccupiedCells {
    cells: HashSet<GridPos>,
}

impl OccupiedCells {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    pub fn contains(&self, cell: &GridPos) -> bool {
        self.cells.contains(cell)
    }
}

/// Settle a unit's final cell and claim it.
///
/// If `candidate` is taken, one randomly chosen axis is nudged a single cell
/// back toward `origin`. The result may still overlap; no second attempt is made.
pub fn resolve(
    candidate: GridPos,
    origin: GridPos,
    occupied: &mut OccupiedCells,
    rng: &mut dyn RandomSource,
) -> GridPos {
    let settled = if occupied.contains(&candidate) {
        let axis = match rng.next_index(2) {
            0 => Axis::X,
            _ => Axis::Y,
        };
        let nudged = nudge_toward(candidate, origin, axis);
        tracing::trace!(?candidate, ?nudged, ?axis, "collision nudge");
        nudged
    } else {
        candidate
    };

    occupied.cells.insert(settled);
    settled
}
