//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use deadshot_core::components::*;
use deadshot_core::enums::GamePhase;
use deadshot_core::events::{Alert, AudioEvent};
use deadshot_core::state::*;
use deadshot_core::types::{Position, SimTime};

use crate::loadout::WeaponSpec;
use crate::spawner::{HitFeedback, ScoreState};

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    round_remaining_secs: f64,
    loadout: &[WeaponSpec],
    score: &ScoreState,
    hit_feedback: &Option<HitFeedback>,
    alerts: Vec<Alert>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        round_remaining_secs: round_remaining_secs.max(0.0),
        player: build_player(world),
        weapon: build_weapon(world, loadout),
        targets: build_targets(world),
        score: build_score(score),
        hit_feedback: hit_feedback.as_ref().map(|feedback| HitFeedbackView {
            zone: feedback.zone,
            points: feedback.points,
            remaining_secs: feedback.remaining_secs,
        }),
        alerts,
        audio_events,
    }
}

/// Build PlayerView from the player entity.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &LookDirection, &PlayerKinematics)>()
        .iter()
        .next()
        .map(|(_, (_, pos, look, kin))| PlayerView {
            position: *pos,
            yaw: look.yaw,
            pitch: look.pitch,
            grounded: kin.grounded,
        })
        .unwrap_or_default()
}

/// Build WeaponView from the player's weapon state and the loadout table.
fn build_weapon(world: &World, loadout: &[WeaponSpec]) -> WeaponView {
    world
        .query::<(&Player, &WeaponState)>()
        .iter()
        .next()
        .map(|(_, (_, weapon))| {
            let (name, magazine_size, automatic) = loadout
                .get(weapon.slot)
                .map(|spec| (spec.name.to_string(), spec.magazine, spec.automatic))
                .unwrap_or_default();

            WeaponView {
                slot: weapon.slot,
                name,
                ammo: weapon.ammo,
                magazine_size,
                reloading: weapon.reload_remaining_secs.is_some(),
                reload_remaining_secs: weapon.reload_remaining_secs.unwrap_or(0.0),
                automatic,
                loadout_size: loadout.len(),
            }
        })
        .unwrap_or_default()
}

/// Build TargetView list from all range targets.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&RangeTarget, &Position, &TargetProfile, &Health, &TargetStatus)>()
        .iter()
        .map(|(_, (_, pos, profile, health, status))| TargetView {
            id: profile.id,
            archetype: profile.archetype,
            position: *pos,
            health: health.current.max(0.0),
            max_health: health.max,
            alive: status.alive,
            flashing: status.flash_remaining_secs > 0.0,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

/// Build ScoreView from the engine's score state.
fn build_score(score: &ScoreState) -> ScoreView {
    let accuracy = if score.shots_fired > 0 {
        score.hits as f64 / score.shots_fired as f64
    } else {
        0.0
    };

    ScoreView {
        score: score.score,
        high_score: score.high_score,
        new_high_score: score.new_high_score,
        shots_fired: score.shots_fired,
        hits: score.hits,
        headshots: score.headshots,
        targets_destroyed: score.targets_destroyed,
        accuracy,
    }
}
