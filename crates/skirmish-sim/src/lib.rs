//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world and the unit roster, runs the per-tick systems,
//! drives the run loop to victory or stagnation, and records the snapshot
//! history consumed by presentation collaborators.

pub mod engine;
pub mod error;
pub mod history;
pub mod random;
pub mod run;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use skirmish_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::{Result, SimError};
