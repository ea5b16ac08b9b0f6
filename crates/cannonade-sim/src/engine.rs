//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world holding every projectile and
//! target, the two cannons, the score and the RNG. It processes queued
//! input, runs all systems in a fixed order and produces `FrameSnapshot`s.
//! Completely headless, so a seeded run is reproducible.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use cannonade_ai::AiController;
use cannonade_core::cannon::Cannon;
use cannonade_core::commands::{InputEvent, PointerState};
use cannonade_core::config::{ConfigError, FieldConfig};
use cannonade_core::constants::{CHARGE_INCREMENT, TARGETS_PER_WAVE};
use cannonade_core::enums::{OrbitAnchor, Shooter, ShotKind};
use cannonade_core::events::SimEvent;
use cannonade_core::projectile::Projectile;
use cannonade_core::score::ScoreTracker;
use cannonade_core::state::FrameSnapshot;
use cannonade_core::target::Target;
use cannonade_core::types::{SimTime, TargetId};

use crate::systems;
use crate::systems::wave_spawner::WavePlan;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub field: FieldConfig,
    /// Repetitions of each group in a wave.
    pub targets_per_wave: u32,
    pub orbit_anchor: OrbitAnchor,
    pub player_shot: ShotKind,
    pub ai_shot: ShotKind,
    /// Whether the AI gunner takes part.
    pub ai_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldConfig::default(),
            targets_per_wave: TARGETS_PER_WAVE,
            orbit_anchor: OrbitAnchor::default(),
            player_shot: ShotKind::default(),
            ai_shot: ShotKind::default(),
            ai_enabled: true,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        if self.targets_per_wave == 0 {
            return Err(ConfigError::EmptyWave);
        }
        Ok(())
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    wave_plan: WavePlan,
    wave: u32,
    player: Cannon,
    gunner: AiController,
    score: ScoreTracker,
    pointer: PointerState,
    input_queue: VecDeque<InputEvent>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    quit: bool,
}

impl SimulationEngine {
    /// Create an engine and spawn the first wave.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self::empty(config);
        systems::wave_spawner::spawn_wave(
            &mut engine.world,
            &mut engine.rng,
            &engine.wave_plan,
            &mut engine.wave,
            engine.score.difficulty(),
            &engine.config.field,
            engine.config.orbit_anchor,
            &mut engine.events,
        );
        engine
    }

    /// Create an engine with no targets or projectiles. The next tick
    /// spawns the first wave unless something is placed first.
    pub fn empty(config: SimConfig) -> Self {
        let field = config.field;
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            wave_plan: WavePlan::standard(config.targets_per_wave),
            wave: 0,
            player: Cannon::player(&field, config.player_shot),
            gunner: AiController::opponent(&field, config.ai_shot),
            score: ScoreTracker::default(),
            pointer: PointerState::default(),
            input_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            quit: false,
            config,
        }
    }

    /// Queue an input event for processing at the next tick boundary.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple input events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Latest pointer state, sampled at the next tick.
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Advance the simulation by one tick. Returns true once quit was requested.
    pub fn tick(&mut self) -> bool {
        self.events.clear();
        self.run_systems();
        self.time.advance(self.config.field.tick_rate);
        self.quit
    }

    /// Everything the render sink needs for the current state.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut cannons = vec![&self.player];
        if self.config.ai_enabled {
            cannons.push(&self.gunner.cannon);
        }
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.wave,
            self.quit,
            &cannons,
            &self.score,
            self.events.clone(),
        )
    }

    /// Place a target on the field.
    pub fn spawn_target(&mut self, target: Target) -> TargetId {
        world_setup::target_id(world_setup::spawn_target(&mut self.world, target))
    }

    /// Place a projectile on the field as if `shooter` had fired it.
    pub fn spawn_projectile(&mut self, projectile: Projectile, shooter: Shooter) {
        world_setup::spawn_projectile(&mut self.world, projectile, shooter);
    }

    /// Look up a live target by handle.
    pub fn target(&self, id: TargetId) -> Option<Target> {
        let entity = world_setup::target_entity(id)?;
        let target = self.world.get::<&Target>(entity).ok()?;
        Some((*target).clone())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn player(&self) -> &Cannon {
        &self.player
    }

    pub fn gunner(&self) -> &AiController {
        &self.gunner
    }

    /// Events raised during the last tick.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn target_count(&self) -> usize {
        self.world.query::<&Target>().iter().count()
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let field = self.config.field;

        // 1. Input and aiming
        if systems::input::run(
            &mut self.world,
            &mut self.input_queue,
            &self.pointer,
            &mut self.player,
            &field,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
        ) {
            self.quit = true;
        }
        // 2. Movement, then the player's charge
        systems::movement::run(&mut self.world, &field, &mut self.rng, &mut self.events);
        self.player.gain(CHARGE_INCREMENT);
        // 3. Spent projectiles leave before collisions
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 4. Collisions
        systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. AI gunner
        if self.config.ai_enabled {
            systems::gunner::run(
                &mut self.world,
                &mut self.gunner,
                &field,
                &mut self.rng,
                &mut self.score,
                &mut self.events,
            );
        }
        // 6. Next wave once the field is clear
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.wave_plan,
            &mut self.wave,
            self.score.difficulty(),
            &field,
            self.config.orbit_anchor,
            &mut self.events,
        );
    }
}
