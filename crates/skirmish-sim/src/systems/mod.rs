//! ECS systems that operate on the battle world each tick.
//!
//! Systems are pure functions over `&mut World` (or `&World` for read-only)
//! plus the engine's roster. They do not own state; all unit state lives
//! in components.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod snapshot;
pub mod targeting;
