//! Run loop configuration and termination rules.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skirmish_core::constants::DEFAULT_STAGNATION_THRESHOLD;
use skirmish_core::enums::StopReason;
use skirmish_core::types::TeamCounts;

use crate::error::{Result, SimError};

/// Parameters for `SimulationEngine::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stop after this many ticks. `None` runs until victory or stagnation.
    pub max_iterations: Option<u64>,
    /// Consecutive ticks of unchanged team counts that end the run.
    pub stagnation_threshold: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            stagnation_threshold: DEFAULT_STAGNATION_THRESHOLD,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.stagnation_threshold == 0 {
            return Err(SimError::InvalidRunConfig(
                "stagnation threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Ticks executed by this run.
    pub ticks: u64,
    pub reason: StopReason,
    /// Team counts when the run stopped.
    pub counts: TeamCounts,
}

/// Cooperative stop request, checked once per tick after the tick completes.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear a previous request so the engine can run again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Rolling window of per-tick team counts for stagnation detection.
#[derive(Debug, Clone)]
pub struct CountWindow {
    counts: VecDeque<TeamCounts>,
    capacity: usize,
}

impl CountWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            counts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, counts: TeamCounts) {
        if self.counts.len() == self.capacity {
            self.counts.pop_front();
        }
        self.counts.push_back(counts);
    }

    /// True once the window is full and every entry is identical.
    pub fn is_stagnant(&self) -> bool {
        match self.counts.front() {
            Some(first) => {
                self.counts.len() >= self.capacity && self.counts.iter().all(|c| c == first)
            }
            None => false,
        }
    }
}

/// Evaluate the stop conditions in priority order: stagnation, victory,
/// iteration cap, cancellation.
pub fn check_stop(
    window: &CountWindow,
    counts: TeamCounts,
    ticks: u64,
    config: &RunConfig,
    cancel: &CancelHandle,
) -> Option<StopReason> {
    if window.is_stagnant() {
        return Some(StopReason::Stagnation);
    }
    if let Some(team) = counts.victor() {
        return Some(StopReason::Victory(team));
    }
    if config.max_iterations.is_some_and(|max| ticks >= max) {
        return Some(StopReason::IterationCap);
    }
    if cancel.is_cancelled() {
        return Some(StopReason::Cancelled);
    }
    None
}
