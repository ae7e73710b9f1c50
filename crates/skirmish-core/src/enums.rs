//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Blue => f.write_str("blue"),
            Team::Red => f.write_str("red"),
        }
    }
}

/// What a unit did during its most recent turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// No enemy in sight; wandering.
    #[default]
    Idle,
    /// Closing distance on a sighted enemy.
    Moving,
    /// Struck the target this tick.
    Attacking,
    /// Target in range, weapon still cooling down.
    Waiting,
}

/// Unit-type tag used by presentation to pick a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Slow melee bruiser.
    Barbarian,
    /// Fast ranged skirmisher.
    Archer,
    /// Any hand-built stat profile.
    Custom,
}

/// Grid axis, used by the collision nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Color class of an engagement indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementColor {
    /// Attacking or winding up.
    Red,
    /// Approaching.
    Yellow,
}

/// Stroke style of an engagement indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeStyle {
    Solid,
    /// Waiting on cooldown.
    Dotted,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Team counts unchanged for the configured number of ticks.
    Stagnation,
    /// One side was eliminated.
    Victory(Team),
    /// The configured iteration cap was reached.
    IterationCap,
    /// A caller requested the run to stop.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Stagnation => f.write_str("stagnation"),
            StopReason::Victory(team) => write!(f, "victory:{team}"),
            StopReason::IterationCap => f.write_str("cap"),
            StopReason::Cancelled => f.write_str("cancelled"),
        }
    }
}
