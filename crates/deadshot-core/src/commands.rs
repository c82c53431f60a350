//! Player commands sent from the input side to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Gameplay
//! commands (firing, movement, reload) are ignored unless the game is
//! in the Active phase.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a round from the menu or the game-over screen.
    StartGame,
    /// Rebuild the range and start over mid-round.
    Restart,
    /// Abandon the round and return to the main menu.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Set time scale (1.0 = normal, clamped to 0.0..4.0).
    SetTimeScale { scale: f64 },

    // --- Movement ---
    /// Held movement axes; applied every tick until replaced.
    SetMoveInput {
        forward: f64,
        strafe: f64,
        running: bool,
    },
    /// Absolute view angles (radians). Pitch is clamped to +-PI/2.
    SetLook { yaw: f64, pitch: f64 },
    /// Jump if grounded.
    Jump,

    // --- Weapon ---
    /// Trigger pulled. Semi-automatic weapons fire once; automatic
    /// weapons start firing and keep going until the trigger releases.
    TriggerPressed,
    /// Trigger released.
    TriggerReleased,
    /// Begin a manual reload (no-op if the magazine is full).
    Reload,
    /// Switch directly to a loadout slot.
    SelectWeapon { slot: usize },
    /// Step through the loadout (mouse wheel), wrapping at both ends.
    CycleWeapon { step: i32 },
}
