//! Core types and definitions for the SKIRMISH battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, unit stats, snapshot views, enums, errors, and constants.
//! It contains no engine logic and no dependency on any presentation layer.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
