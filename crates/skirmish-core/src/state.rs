//! Battle snapshot: the complete visible state handed to presentation collaborators.
//!
//! Snapshots are owned values; nothing in them refers back into the engine.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{BoardSize, GridPos, UnitId};

/// Complete battle state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    /// Number of ticks completed when the snapshot was taken.
    pub tick: u64,
    pub board: BoardSize,
    /// Active units in roster order.
    pub units: Vec<UnitView>,
    pub engagements: Vec<EngagementView>,
}

/// One active unit as seen by presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub position: GridPos,
    pub team: Team,
    /// Current health over max health. Negative once overkilled.
    pub health_ratio: f64,
    pub kind: UnitKind,
    /// False for units killed this tick and not yet swept.
    pub alive: bool,
}

/// A source-to-target indicator for a unit that is pursuing or fighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementView {
    pub source: UnitId,
    pub target: UnitId,
    pub source_position: GridPos,
    pub target_position: GridPos,
    pub color: EngagementColor,
    pub stroke: StrokeStyle,
}

/// Full runtime state of one unit, for inspection and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStatus {
    pub id: UnitId,
    pub team: Team,
    pub kind: UnitKind,
    pub position: GridPos,
    pub health: i64,
    pub cooldown_timer: u32,
    pub action: Action,
    pub target: Option<UnitId>,
}
