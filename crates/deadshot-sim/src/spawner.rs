//! Range state tracked outside the ECS world: the target spawner,
//! the running score, and the transient hit-feedback cue.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use deadshot_core::constants::*;
use deadshot_core::enums::HitZone;
use deadshot_core::types::Position;

/// Maintains the bounded population of spawner-managed silhouettes.
#[derive(Debug, Clone)]
pub struct SpawnerState {
    /// Entities of the currently live silhouettes. Never exceeds `max_targets`.
    pub active: Vec<hecs::Entity>,
    pub max_targets: usize,
    /// Center of the rectangular spawn area.
    pub area_center: Position,
    pub area_half_x: f64,
    pub area_half_y: f64,
    /// Minimum ground distance between a fresh spawn and every active target.
    pub min_target_separation: f64,
    /// Minimum ground distance between a fresh spawn and the player.
    pub min_player_clearance: f64,
}

impl Default for SpawnerState {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            max_targets: MAX_ACTIVE_TARGETS,
            area_center: Position::default(),
            area_half_x: SPAWN_AREA_HALF_X,
            area_half_y: SPAWN_AREA_HALF_Y,
            min_target_separation: MIN_TARGET_SEPARATION,
            min_player_clearance: MIN_PLAYER_CLEARANCE,
        }
    }
}

impl SpawnerState {
    pub fn at_capacity(&self) -> bool {
        self.active.len() >= self.max_targets
    }

    /// Remove a destroyed target from the active set.
    /// Returns whether it was tracked by this spawner.
    pub fn remove(&mut self, entity: hecs::Entity) -> bool {
        let before = self.active.len();
        self.active.retain(|e| *e != entity);
        self.active.len() != before
    }

    /// Pick a spawn position by rejection sampling.
    ///
    /// The inner loop re-draws until the candidate clears the player, the
    /// outer loop until it clears every active target. If either cap runs
    /// out the last sample is accepted as-is; the returned flag reports
    /// that best-effort fallback.
    pub fn sample_spawn_position(
        &self,
        rng: &mut ChaCha8Rng,
        existing: &[Position],
        player: &Position,
    ) -> (Position, bool) {
        let (mut candidate, mut fell_back) = self.random_clear_position(rng, player);

        let mut attempts = 0;
        while self.too_close_to_targets(&candidate, existing)
            && attempts < SPAWN_SEPARATION_ATTEMPTS
        {
            let (next, clear_fallback) = self.random_clear_position(rng, player);
            candidate = next;
            fell_back = fell_back || clear_fallback;
            attempts += 1;
        }

        if self.too_close_to_targets(&candidate, existing) {
            fell_back = true;
        }

        (candidate, fell_back)
    }

    /// Draw points in the area until one is clear of the player (capped).
    fn random_clear_position(&self, rng: &mut ChaCha8Rng, player: &Position) -> (Position, bool) {
        let mut attempts = 0;
        loop {
            let candidate = Position::new(
                self.area_center.x + rng.gen_range(-self.area_half_x..self.area_half_x),
                self.area_center.y + rng.gen_range(-self.area_half_y..self.area_half_y),
                self.area_center.z,
            );
            attempts += 1;

            if candidate.horizontal_range_to(player) >= self.min_player_clearance {
                return (candidate, false);
            }
            if attempts >= SPAWN_CLEARANCE_ATTEMPTS {
                return (candidate, true);
            }
        }
    }

    fn too_close_to_targets(&self, position: &Position, existing: &[Position]) -> bool {
        existing
            .iter()
            .any(|p| position.horizontal_range_to(p) < self.min_target_separation)
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    /// Best score ever seen, seeded from the persisted value.
    pub high_score: u32,
    /// Latched once this round's score first beats the high score.
    pub new_high_score: bool,
    pub shots_fired: u32,
    pub hits: u32,
    pub headshots: u32,
    pub targets_destroyed: u32,
}

impl ScoreState {
    /// Add points and roll the high score forward if beaten.
    pub fn award(&mut self, points: u32) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
        }
    }

    /// Clear per-round counters; the high score survives.
    pub fn reset_round(&mut self) {
        let high_score = self.high_score;
        *self = Self {
            high_score,
            ..Self::default()
        };
    }
}

/// Transient HEADSHOT!/BODYSHOT cue, alive while its timer runs.
#[derive(Debug, Clone)]
pub struct HitFeedback {
    pub zone: HitZone,
    pub points: u32,
    pub remaining_secs: f64,
}
