//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Round ---

/// Length of one range session in seconds.
pub const ROUND_DURATION_SECS: f64 = 60.0;

// --- Scoring ---

/// Points for a hit on the head zone of a silhouette.
pub const HEADSHOT_POINTS: u32 = 50;

/// Points for a hit on the body zone of a silhouette.
pub const BODYSHOT_POINTS: u32 = 25;

// --- Spawner ---

/// Maximum number of spawner-managed silhouettes alive at once.
pub const MAX_ACTIVE_TARGETS: usize = 3;

/// Spawn area half-extent along the East axis (full area 8x8 m).
pub const SPAWN_AREA_HALF_X: f64 = 4.0;

/// Spawn area half-extent along the North axis.
pub const SPAWN_AREA_HALF_Y: f64 = 4.0;

/// Minimum ground distance between a fresh spawn and every active target.
pub const MIN_TARGET_SEPARATION: f64 = 3.0;

/// Minimum ground distance between a fresh spawn and the player.
pub const MIN_PLAYER_CLEARANCE: f64 = 10.0;

/// Resampling cap for the target-separation rejection loop.
pub const SPAWN_SEPARATION_ATTEMPTS: u32 = 20;

/// Resampling cap for the player-clearance rejection loop.
pub const SPAWN_CLEARANCE_ATTEMPTS: u32 = 30;

// --- Silhouette hit zones ---

/// Height of the head sphere center above the silhouette base.
pub const SILHOUETTE_HEAD_HEIGHT: f64 = 1.5;

/// Radius of the head sphere.
pub const SILHOUETTE_HEAD_RADIUS: f64 = 0.2;

/// Bottom of the body capsule segment above the base.
pub const SILHOUETTE_BODY_BOTTOM: f64 = 0.0;

/// Top of the body capsule segment above the base.
pub const SILHOUETTE_BODY_TOP: f64 = 1.2;

/// Radius of the body capsule.
pub const SILHOUETTE_BODY_RADIUS: f64 = 0.3;

// --- Target lifecycle ---

/// Delay before a respawning block target comes back.
pub const BLOCK_RESPAWN_SECS: f64 = 3.0;

/// Respawn repositioning scatter, uniform on both ground axes.
pub const RESPAWN_SCATTER: f64 = 5.0;

/// Duration of the white hit-flash cue.
pub const HIT_FLASH_SECS: f64 = 0.1;

/// How long the HEADSHOT!/BODYSHOT feedback stays up.
pub const HIT_FEEDBACK_SECS: f64 = 1.0;

/// How long a dead silhouette lingers before despawn.
pub const CORPSE_LINGER_SECS: f64 = 0.1;

/// Arrival tolerance for roaming targets.
pub const ROAM_ARRIVE_EPS: f64 = 0.1;

// --- Player ---

/// Player start position, south of the spawn area, facing North.
pub const PLAYER_SPAWN_X: f64 = 0.0;
pub const PLAYER_SPAWN_Y: f64 = -12.0;

// --- Player kinematics ---

/// Walking speed (m/s).
pub const WALK_SPEED: f64 = 5.0;

/// Running speed (m/s).
pub const RUN_SPEED: f64 = 8.0;

/// Jump apex height (meters).
pub const JUMP_HEIGHT: f64 = 2.0;

/// Gravity magnitude (m/s^2).
pub const GRAVITY: f64 = 19.62;

/// Eye height above the player base; the weapon ray originates here.
pub const EYE_HEIGHT: f64 = 1.6;
