//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A live round went off.
    Gunshot { slot: usize },
    /// Trigger pulled on an empty magazine.
    DryFire,
    /// Reload started (manual or automatic on empty).
    ReloadStarted { duration_secs: f64 },
    /// Magazine refilled.
    ReloadComplete,
    /// Bullet impact point for a hit.
    Impact { position: Position },
    /// A target went down.
    TargetDown {
        archetype: TargetArchetype,
        points: u32,
    },
    /// A block target came back up.
    TargetRespawned { archetype: TargetArchetype },
    /// Weapon switched to a new slot.
    WeaponSwitched { slot: usize },
    /// Round clock ran out.
    TimeUp {
        final_score: u32,
        new_high_score: bool,
    },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
