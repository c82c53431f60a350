//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TargetArchetype;
use crate::types::Position;

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// View direction, absolute angles accumulated by the input side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LookDirection {
    /// Yaw in radians, 0 = North, clockwise toward East.
    pub yaw: f64,
    /// Pitch in radians, positive = up, clamped to +-PI/2.
    pub pitch: f64,
}

/// Held movement input, applied every tick while the game is active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Forward axis in [-1, 1] (positive = toward the view direction).
    pub forward: f64,
    /// Strafe axis in [-1, 1] (positive = right).
    pub strafe: f64,
    /// Whether the run modifier is held.
    pub running: bool,
}

/// Vertical motion state for the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerKinematics {
    /// Vertical speed (m/s, positive = up).
    pub vertical_speed: f64,
    /// Whether the player is standing on the ground.
    pub grounded: bool,
}

impl Default for PlayerKinematics {
    fn default() -> Self {
        Self {
            vertical_speed: 0.0,
            grounded: true,
        }
    }
}

/// Weapon state carried by the player entity.
///
/// The weapon itself (damage, range, rate, magazine) is a row of the static
/// loadout table, referenced by `slot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponState {
    /// Index into the loadout table.
    pub slot: usize,
    /// Rounds left in the magazine.
    pub ammo: u32,
    /// Seconds until the next shot may fire.
    pub cooldown_remaining_secs: f64,
    /// Seconds left on the current reload, if one is in progress.
    pub reload_remaining_secs: Option<f64>,
    /// Whether the trigger is currently held (automatic fire).
    pub trigger_held: bool,
}

/// Marks an entity as a shootable range target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeTarget;

/// Marks a target as owned by the spawner (silhouettes only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnerManaged;

/// Static target identity and scoring data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Stable id assigned at spawn, for display and ordering.
    pub id: u32,
    pub archetype: TargetArchetype,
    /// Points awarded when a block target is destroyed.
    /// Silhouettes score per hit zone instead.
    pub point_value: u32,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Mutable lifecycle state of a target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetStatus {
    /// Dead targets take no damage and are skipped by hit resolution.
    pub alive: bool,
    /// Remaining seconds on the white hit-flash cue.
    pub flash_remaining_secs: f64,
    /// Tick at which a block target comes back, if it is down.
    pub respawn_at_tick: Option<u64>,
    /// Tick at which a dead silhouette is removed from the world.
    pub despawn_at_tick: Option<u64>,
}

/// Head zone geometry: a sphere offset above the target base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadZone {
    pub center_height: f64,
    pub radius: f64,
}

/// Body zone geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BodyZone {
    /// Vertical capsule: segment from `bottom` to `top` above the base.
    Capsule { bottom: f64, top: f64, radius: f64 },
    /// Simple sphere, used by the block targets.
    Sphere { center_height: f64, radius: f64 },
}

/// Raycast geometry for a target, in target-local heights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitZones {
    pub head: Option<HeadZone>,
    pub body: BodyZone,
}

/// Anchor point a target respawns and roams around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HomePoint {
    pub position: Position,
}

/// Roaming behavior for moving targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Roam {
    /// Movement speed (m/s).
    pub speed: f64,
    /// Waypoints are picked on a circle of this radius around home.
    pub range: f64,
    /// Current waypoint.
    pub waypoint: Position,
}
