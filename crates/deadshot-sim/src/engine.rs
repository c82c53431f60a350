//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no shell dependency), enabling deterministic testing.

use std::collections::VecDeque;
use std::f64::consts::FRAC_PI_2;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use deadshot_core::commands::PlayerCommand;
use deadshot_core::components::{LookDirection, MoveIntent, Player};
use deadshot_core::constants::{DT, ROUND_DURATION_SECS};
use deadshot_core::enums::GamePhase;
use deadshot_core::events::{Alert, AudioEvent};
use deadshot_core::state::GameStateSnapshot;
use deadshot_core::types::SimTime;

use crate::loadout::{self, WeaponSpec};
use crate::spawner::{HitFeedback, ScoreState, SpawnerState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Persisted high score carried into this session.
    pub high_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            high_score: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all range state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    next_target_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
    loadout: Vec<WeaponSpec>,
    spawner: SpawnerState,
    score: ScoreState,
    round_remaining_secs: f64,
    hit_feedback: Option<HitFeedback>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let score = ScoreState {
            high_score: config.high_score,
            ..Default::default()
        };

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_target_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            alerts: Vec::new(),
            loadout: loadout::default_loadout(),
            spawner: SpawnerState::default(),
            score,
            round_remaining_secs: 0.0,
            hit_feedback: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.round_remaining_secs,
            &self.loadout,
            &self.score,
            &self.hit_feedback,
            alerts,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the spawner state.
    #[cfg(test)]
    pub fn spawner(&self) -> &SpawnerState {
        &self.spawner
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get the weapon loadout table.
    pub fn loadout(&self) -> &[WeaponSpec] {
        &self.loadout
    }

    /// Remove all spawner-managed silhouettes (for tests that need a
    /// clear line of fire).
    #[cfg(test)]
    pub fn clear_silhouettes(&mut self) {
        let entities: Vec<hecs::Entity> = self.spawner.active.drain(..).collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn a silhouette at an exact position (for tests needing a
    /// known target location).
    #[cfg(test)]
    pub fn spawn_silhouette_at(
        &mut self,
        position: deadshot_core::types::Position,
    ) -> hecs::Entity {
        world_setup::spawn_silhouette_at(
            &mut self.world,
            &mut self.spawner,
            &mut self.next_target_id,
            position,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_round();
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::MainMenu {
                    self.start_round();
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.spawner = SpawnerState::default();
                self.score.reset_round();
                self.hit_feedback = None;
                self.round_remaining_secs = 0.0;
                self.time = SimTime::default();
                self.phase = GamePhase::MainMenu;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetMoveInput {
                forward,
                strafe,
                running,
            } => {
                for (_entity, (_player, intent)) in
                    self.world.query_mut::<(&Player, &mut MoveIntent)>()
                {
                    intent.forward = forward.clamp(-1.0, 1.0);
                    intent.strafe = strafe.clamp(-1.0, 1.0);
                    intent.running = running;
                }
            }
            PlayerCommand::SetLook { yaw, pitch } => {
                for (_entity, (_player, look)) in
                    self.world.query_mut::<(&Player, &mut LookDirection)>()
                {
                    look.yaw = yaw.rem_euclid(std::f64::consts::TAU);
                    look.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
                }
            }
            PlayerCommand::Jump => {
                if self.phase == GamePhase::Active {
                    systems::player::jump(&mut self.world);
                }
            }
            PlayerCommand::TriggerPressed => {
                if self.phase == GamePhase::Active {
                    systems::weapon::trigger_pressed(
                        &mut self.world,
                        &self.loadout,
                        &mut self.spawner,
                        &mut self.score,
                        &mut self.rng,
                        &mut self.next_target_id,
                        &mut self.audio_events,
                        &mut self.alerts,
                        &mut self.hit_feedback,
                        self.time.tick,
                    );
                }
            }
            PlayerCommand::TriggerReleased => {
                systems::weapon::trigger_released(&mut self.world);
            }
            PlayerCommand::Reload => {
                if self.phase == GamePhase::Active {
                    systems::weapon::start_reload(
                        &mut self.world,
                        &self.loadout,
                        &mut self.audio_events,
                    );
                }
            }
            PlayerCommand::SelectWeapon { slot } => {
                if self.phase == GamePhase::Active {
                    systems::weapon::select_weapon(
                        &mut self.world,
                        &self.loadout,
                        slot,
                        &mut self.audio_events,
                    );
                }
            }
            PlayerCommand::CycleWeapon { step } => {
                if self.phase == GamePhase::Active {
                    systems::weapon::cycle_weapon(
                        &mut self.world,
                        &self.loadout,
                        step,
                        &mut self.audio_events,
                    );
                }
            }
        }
    }

    /// Tear down and rebuild the range, then go Active.
    fn start_round(&mut self) {
        self.world.clear();
        self.spawner = SpawnerState::default();
        self.score.reset_round();
        self.hit_feedback = None;
        self.time = SimTime::default();
        self.round_remaining_secs = ROUND_DURATION_SECS;
        self.next_target_id = 0;

        world_setup::setup_range(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &mut self.next_target_id,
            &mut self.alerts,
            self.time.tick,
            &self.loadout,
        );

        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Player kinematics
        systems::player::run(&mut self.world);
        // 2. Roaming targets
        systems::roam::run(&mut self.world, &mut self.rng);
        // 3. Weapon timers + automatic fire
        systems::weapon::run(
            &mut self.world,
            &self.loadout,
            &mut self.spawner,
            &mut self.score,
            &mut self.rng,
            &mut self.next_target_id,
            &mut self.audio_events,
            &mut self.alerts,
            &mut self.hit_feedback,
            self.time.tick,
        );
        // 4. Block target respawns
        systems::respawn::run(
            &mut self.world,
            &mut self.rng,
            &mut self.audio_events,
            self.time.tick,
        );
        // 5. Flash / feedback timers
        systems::feedback::run(&mut self.world, &mut self.hit_feedback);
        // 6. Corpse removal
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.time.tick);

        // 7. Round clock
        self.round_remaining_secs -= DT;
        if self.round_remaining_secs <= 0.0 {
            self.end_round();
        }
    }

    /// Round clock ran out: freeze the range and report the result.
    fn end_round(&mut self) {
        self.round_remaining_secs = 0.0;
        self.phase = GamePhase::GameOver;
        self.audio_events.push(AudioEvent::TimeUp {
            final_score: self.score.score,
            new_high_score: self.score.new_high_score,
        });
    }
}
