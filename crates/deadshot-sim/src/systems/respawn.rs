//! Respawn system for block targets.
//!
//! When a down target's clock expires it comes back at full health,
//! repositioned at a random offset from its home point. The home point
//! moves with it.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use deadshot_core::components::{Health, HomePoint, TargetProfile, TargetStatus};
use deadshot_core::constants::RESPAWN_SCATTER;
use deadshot_core::events::AudioEvent;
use deadshot_core::types::Position;

/// Revive block targets whose respawn clock has expired.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    audio_events: &mut Vec<AudioEvent>,
    current_tick: u64,
) {
    for (_entity, (pos, health, status, home, profile)) in world.query_mut::<(
        &mut Position,
        &mut Health,
        &mut TargetStatus,
        &mut HomePoint,
        &TargetProfile,
    )>() {
        let due = matches!(status.respawn_at_tick, Some(tick) if current_tick >= tick);
        if !due {
            continue;
        }

        health.current = health.max;
        status.alive = true;
        status.respawn_at_tick = None;
        status.flash_remaining_secs = 0.0;

        let new_position = Position::new(
            home.position.x + rng.gen_range(-RESPAWN_SCATTER..RESPAWN_SCATTER),
            home.position.y + rng.gen_range(-RESPAWN_SCATTER..RESPAWN_SCATTER),
            home.position.z,
        );
        *pos = new_position;
        home.position = new_position;

        audio_events.push(AudioEvent::TargetRespawned {
            archetype: profile.archetype,
        });
    }
}
