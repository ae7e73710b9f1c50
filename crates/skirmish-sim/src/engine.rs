//! Simulation engine: the core of the battle.
//!
//! `SimulationEngine` owns the hecs world, the insertion-ordered unit roster,
//! and the random source. It runs the tick systems, records snapshots, and
//! drives the run loop. Completely headless, enabling deterministic testing.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::components::Health;
use skirmish_core::constants::DEFAULT_SEED;
use skirmish_core::enums::{StopReason, Team};
use skirmish_core::state::{BattleSnapshot, UnitStatus};
use skirmish_core::types::{BoardSize, GridPos, SimTime, TeamCounts, UnitId, UnitStats};

use crate::error::Result;
use crate::history::History;
use crate::random::{RandomSource, SeededRandom};
use crate::run::{self, CancelHandle, CountWindow, RunConfig, RunOutcome};
use crate::scenario::{self, BattlePreset, Deployment};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same battle.
    pub seed: u64,
    /// Board size reported to collaborators and used by battle presets.
    pub board: BoardSize,
    /// Keep a snapshot per tick in the history recorder.
    pub record_history: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            board: BoardSize::default(),
            record_history: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all battle state.
pub struct SimulationEngine {
    world: World,
    /// Active units in registration order. Decisions run in this order.
    roster: Vec<Entity>,
    index: HashMap<UnitId, Entity>,
    time: SimTime,
    board: BoardSize,
    rng: Box<dyn RandomSource>,
    next_unit_id: u32,
    record_history: bool,
    history: History,
    cancel: CancelHandle,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create an empty battlefield with a seeded random source.
    pub fn new(config: SimConfig) -> Self {
        Self::with_random_source(config, Box::new(SeededRandom::new(config.seed)))
    }

    /// Create an empty battlefield with a caller-supplied random source.
    pub fn with_random_source(config: SimConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            world: World::new(),
            roster: Vec::new(),
            index: HashMap::new(),
            time: SimTime::default(),
            board: config.board,
            rng,
            next_unit_id: 0,
            record_history: config.record_history,
            history: History::default(),
            cancel: CancelHandle::default(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Create a battlefield populated from a preset. Placement uses its own
    /// seeded stream so the battle's random choices are unaffected by setup.
    pub fn from_preset(config: SimConfig, preset: BattlePreset) -> Result<Self> {
        let mut setup_rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1));
        let deployments = scenario::build(preset, config.board, &mut setup_rng)?;
        let mut engine = Self::new(config);
        engine.deploy(deployments)?;
        tracing::info!(?preset, units = engine.unit_count(), "battle set up");
        Ok(engine)
    }

    /// Register a new unit. Stats are validated before anything is spawned.
    pub fn add_unit(
        &mut self,
        stats: UnitStats,
        position: GridPos,
        team: Team,
    ) -> Result<UnitId> {
        stats.validate()?;

        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;

        let entity = world_setup::spawn_unit(&mut self.world, id, stats, position, team);
        self.roster.push(entity);
        self.index.insert(id, entity);

        tracing::debug!(unit = id.0, ?team, kind = ?stats.kind, ?position, "unit registered");
        Ok(id)
    }

    /// Register a batch of units in order. Stops at the first invalid one.
    pub fn deploy(
        &mut self,
        deployments: impl IntoIterator<Item = Deployment>,
    ) -> Result<Vec<UnitId>> {
        deployments
            .into_iter()
            .map(|d| self.add_unit(d.stats, d.position, d.team))
            .collect()
    }

    /// Advance the battle by exactly one tick.
    pub fn step(&mut self) {
        if self.record_history && self.history.is_empty() {
            let initial = self.snapshot();
            self.history.push(initial);
        }

        // 1. Sweep units that died last tick
        let swept = systems::cleanup::run(
            &mut self.world,
            &mut self.roster,
            &mut self.index,
            &mut self.despawn_buffer,
        );
        debug_assert!(self.roster_is_alive(), "dead unit on the roster after the sweep");

        // 2. Per-unit targeting, combat, movement, collision, cooldown decay
        systems::combat::run(&mut self.world, &self.roster, self.rng.as_mut());

        self.time.advance();

        // 3. Record the resulting state
        if self.record_history {
            let snapshot = self.snapshot();
            self.history.push(snapshot);
        }

        tracing::debug!(
            tick = self.time.tick,
            swept,
            active = self.roster.len(),
            "tick complete"
        );
    }

    /// Run until victory, stagnation, the iteration cap, or cancellation.
    pub fn run(&mut self, config: &RunConfig) -> Result<RunOutcome> {
        config.validate()?;

        let mut window = CountWindow::new(config.stagnation_threshold);
        let mut ticks = 0;

        if config.max_iterations == Some(0) {
            return Ok(self.finish(ticks, StopReason::IterationCap));
        }

        loop {
            self.step();
            ticks += 1;

            let counts = self.team_counts();
            window.push(counts);

            if let Some(reason) = run::check_stop(&window, counts, ticks, config, &self.cancel) {
                return Ok(self.finish(ticks, reason));
            }
        }
    }

    fn finish(&self, ticks: u64, reason: StopReason) -> RunOutcome {
        let counts = self.team_counts();
        tracing::info!(
            %reason,
            ticks,
            blue = counts.blue,
            red = counts.red,
            "battle finished"
        );
        RunOutcome {
            ticks,
            reason,
            counts,
        }
    }

    /// The current battle state, by value.
    pub fn snapshot(&self) -> BattleSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.index,
            &self.time,
            self.board,
        )
    }

    /// Active units per team. Units killed this tick count until swept.
    pub fn team_counts(&self) -> TeamCounts {
        let mut counts = TeamCounts::default();
        for &entity in &self.roster {
            match self.world.get::<&Team>(entity).map(|team| *team) {
                Ok(Team::Blue) => counts.blue += 1,
                Ok(Team::Red) => counts.red += 1,
                Err(_) => {}
            }
        }
        counts
    }

    /// Detailed state of a unit still on the roster.
    pub fn unit(&self, id: UnitId) -> Option<UnitStatus> {
        let entity = *self.index.get(&id)?;
        systems::snapshot::unit_status(&self.world, entity)
    }

    /// Ids of the active units in decision order.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.roster
            .iter()
            .filter_map(|&entity| self.world.get::<&UnitId>(entity).ok().map(|id| *id))
            .collect()
    }

    pub fn unit_count(&self) -> usize {
        self.roster.len()
    }

    /// Recorded snapshots, oldest first.
    pub fn history(&self) -> &[BattleSnapshot] {
        self.history.frames()
    }

    /// Move the recorded snapshots out of the engine.
    pub fn take_history(&mut self) -> Vec<BattleSnapshot> {
        self.history.take()
    }

    /// A handle another thread can use to stop `run` after the current tick.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn roster_is_alive(&self) -> bool {
        self.roster.iter().all(|&entity| {
            self.world
                .get::<&Health>(entity)
                .map(|health| health.current > 0)
                .unwrap_or(false)
        })
    }
}
