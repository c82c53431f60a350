//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, AudioEvent};
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Seconds left on the round clock (0 when not in a round).
    pub round_remaining_secs: f64,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub targets: Vec<TargetView>,
    pub score: ScoreView,
    /// HEADSHOT!/BODYSHOT cue, present while its timer runs.
    pub hit_feedback: Option<HitFeedbackView>,
    pub alerts: Vec<Alert>,
    pub audio_events: Vec<AudioEvent>,
}

/// Player position and view for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub yaw: f64,
    pub pitch: f64,
    pub grounded: bool,
}

/// Current weapon status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub slot: usize,
    pub name: String,
    pub ammo: u32,
    pub magazine_size: u32,
    pub reloading: bool,
    pub reload_remaining_secs: f64,
    pub automatic: bool,
    /// Number of weapons in the loadout (for the switch hint).
    pub loadout_size: usize,
}

/// A visible target on the range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub archetype: TargetArchetype,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// Down targets stay in the list (hidden by the frontend) until they
    /// respawn or despawn.
    pub alive: bool,
    /// Whether the white hit flash is running.
    pub flashing: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub high_score: u32,
    /// Latched once the round's score first exceeds the stored high score.
    pub new_high_score: bool,
    pub shots_fired: u32,
    pub hits: u32,
    pub headshots: u32,
    pub targets_destroyed: u32,
    /// hits / shots_fired, 0.0 before the first shot.
    pub accuracy: f64,
}

/// Transient hit-classification cue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitFeedbackView {
    pub zone: HitZone,
    pub points: u32,
    pub remaining_secs: f64,
}
