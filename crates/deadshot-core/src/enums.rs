//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Target archetype category.
///
/// `Silhouette` is the zone-scored one-hit target managed by the spawner.
/// The remaining archetypes are health-depleting block targets that respawn
/// on their own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArchetype {
    /// Person-shaped target with head and body zones. One hit kills.
    Silhouette,
    /// Standard block target.
    Basic,
    /// Heavy block target, takes several magazines of fire.
    Armored,
    /// Small block target that roams around its home point.
    Fast,
    /// Oversized block target with a deep health pool.
    Giant,
}

/// Hit classification by struck zone, determining point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitZone {
    Head,
    Body,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
