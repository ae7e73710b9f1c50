//! Unit behavior for SKIRMISH.
//!
//! Implements the per-unit combat decision state machine and the grid
//! step math behind approach, wander, and collision nudges.

pub mod decision;
pub mod movement;

pub use skirmish_core as core;
