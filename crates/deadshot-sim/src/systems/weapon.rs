//! Weapon system — trigger handling, fire-rate cooldown, reload timing,
//! shot resolution, and damage delivery.
//!
//! The weapon has no state machine beyond {idle, firing-cooldown,
//! reloading}; firing input during a reload is ignored and a reload runs
//! to completion unless a weapon switch cancels it.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use deadshot_core::components::*;
use deadshot_core::constants::*;
use deadshot_core::enums::{HitZone, TargetArchetype};
use deadshot_core::events::{Alert, AudioEvent};
use deadshot_core::types::Position;

use crate::loadout::WeaponSpec;
use crate::spawner::{HitFeedback, ScoreState, SpawnerState};
use crate::systems::raycast::{self, RayHit};
use crate::world_setup;

fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).round() as u64
}

/// Run the weapon system for one tick: advance cooldown and reload
/// timers, then fire held automatic triggers.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    loadout: &[WeaponSpec],
    spawner: &mut SpawnerState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    alerts: &mut Vec<Alert>,
    hit_feedback: &mut Option<HitFeedback>,
    current_tick: u64,
) {
    let mut auto_fire = false;

    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut WeaponState)>() {
        let spec = match loadout.get(weapon.slot) {
            Some(spec) => spec,
            None => continue,
        };

        if weapon.cooldown_remaining_secs > 0.0 {
            weapon.cooldown_remaining_secs = (weapon.cooldown_remaining_secs - DT).max(0.0);
        }

        if let Some(remaining) = weapon.reload_remaining_secs {
            let remaining = remaining - DT;
            if remaining <= 0.0 {
                weapon.ammo = spec.magazine;
                weapon.reload_remaining_secs = None;
                audio_events.push(AudioEvent::ReloadComplete);
            } else {
                weapon.reload_remaining_secs = Some(remaining);
            }
        }

        if weapon.trigger_held
            && spec.automatic
            && weapon.reload_remaining_secs.is_none()
            && weapon.cooldown_remaining_secs <= 0.0
        {
            auto_fire = true;
        }
    }

    if auto_fire {
        fire_shot(
            world,
            loadout,
            spawner,
            score,
            rng,
            next_target_id,
            audio_events,
            alerts,
            hit_feedback,
            current_tick,
        );
    }
}

/// Trigger pulled. Fires immediately when ready; automatic weapons also
/// latch the trigger so `run` keeps firing.
#[allow(clippy::too_many_arguments)]
pub fn trigger_pressed(
    world: &mut World,
    loadout: &[WeaponSpec],
    spawner: &mut SpawnerState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    alerts: &mut Vec<Alert>,
    hit_feedback: &mut Option<HitFeedback>,
    current_tick: u64,
) {
    let mut fire_now = false;

    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut WeaponState)>() {
        weapon.trigger_held = true;
        if weapon.reload_remaining_secs.is_some() || weapon.cooldown_remaining_secs > 0.0 {
            continue;
        }
        fire_now = true;
    }

    if fire_now {
        fire_shot(
            world,
            loadout,
            spawner,
            score,
            rng,
            next_target_id,
            audio_events,
            alerts,
            hit_feedback,
            current_tick,
        );
    }
}

/// Trigger released; stops automatic fire.
pub fn trigger_released(world: &mut World) {
    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut WeaponState)>() {
        weapon.trigger_held = false;
    }
}

/// Begin a manual reload. No-op while already reloading or with a full
/// magazine.
pub fn start_reload(world: &mut World, loadout: &[WeaponSpec], audio_events: &mut Vec<AudioEvent>) {
    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut WeaponState)>() {
        let spec = match loadout.get(weapon.slot) {
            Some(spec) => spec,
            None => continue,
        };
        if weapon.reload_remaining_secs.is_some() || weapon.ammo >= spec.magazine {
            continue;
        }
        weapon.reload_remaining_secs = Some(spec.reload_secs);
        audio_events.push(AudioEvent::ReloadStarted {
            duration_secs: spec.reload_secs,
        });
    }
}

/// Switch to a loadout slot. The new weapon comes up with a full
/// magazine, any reload in progress is cancelled.
pub fn select_weapon(
    world: &mut World,
    loadout: &[WeaponSpec],
    slot: usize,
    audio_events: &mut Vec<AudioEvent>,
) {
    let spec = match loadout.get(slot) {
        Some(spec) => spec,
        None => return,
    };

    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut WeaponState)>() {
        weapon.slot = slot;
        weapon.ammo = spec.magazine;
        weapon.cooldown_remaining_secs = 0.0;
        weapon.reload_remaining_secs = None;
        audio_events.push(AudioEvent::WeaponSwitched { slot });
    }
}

/// Step through the loadout, wrapping at both ends.
pub fn cycle_weapon(
    world: &mut World,
    loadout: &[WeaponSpec],
    step: i32,
    audio_events: &mut Vec<AudioEvent>,
) {
    if loadout.is_empty() {
        return;
    }

    let current = world
        .query::<(&Player, &WeaponState)>()
        .iter()
        .next()
        .map(|(_, (_, weapon))| weapon.slot as i32)
        .unwrap_or(0);

    let len = loadout.len() as i32;
    let next = (current + step).rem_euclid(len) as usize;
    select_weapon(world, loadout, next, audio_events);
}

/// Fire one round: consume ammo, start the cooldown, cast the ray and
/// deliver damage. An empty magazine dry-fires and auto-reloads instead.
#[allow(clippy::too_many_arguments)]
fn fire_shot(
    world: &mut World,
    loadout: &[WeaponSpec],
    spawner: &mut SpawnerState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    alerts: &mut Vec<Alert>,
    hit_feedback: &mut Option<HitFeedback>,
    current_tick: u64,
) {
    let mut shot: Option<(glam::DVec3, glam::DVec3, f64, f64)> = None;

    for (_entity, (_player, pos, look, weapon)) in
        world.query_mut::<(&Player, &Position, &LookDirection, &mut WeaponState)>()
    {
        let spec = match loadout.get(weapon.slot) {
            Some(spec) => spec,
            None => continue,
        };

        if weapon.ammo == 0 {
            audio_events.push(AudioEvent::DryFire);
            if weapon.reload_remaining_secs.is_none() {
                weapon.reload_remaining_secs = Some(spec.reload_secs);
                audio_events.push(AudioEvent::ReloadStarted {
                    duration_secs: spec.reload_secs,
                });
            }
            continue;
        }

        weapon.ammo -= 1;
        weapon.cooldown_remaining_secs = spec.shot_cooldown_secs();
        audio_events.push(AudioEvent::Gunshot { slot: weapon.slot });

        let (origin, direction) = raycast::view_ray(pos, look);
        shot = Some((origin, direction, spec.range, spec.damage));
    }

    let (origin, direction, range, damage) = match shot {
        Some(shot) => shot,
        None => return,
    };
    score.shots_fired += 1;

    let hit = match raycast::resolve(world, origin, direction, range) {
        Some(hit) => hit,
        None => return,
    };
    audio_events.push(AudioEvent::Impact {
        position: hit.point,
    });

    apply_hit(
        world,
        &hit,
        damage,
        spawner,
        score,
        rng,
        next_target_id,
        audio_events,
        alerts,
        hit_feedback,
        current_tick,
    );
}

/// Deliver damage from a resolved hit. Dead targets are a no-op.
#[allow(clippy::too_many_arguments)]
fn apply_hit(
    world: &mut World,
    hit: &RayHit,
    damage: f64,
    spawner: &mut SpawnerState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    alerts: &mut Vec<Alert>,
    hit_feedback: &mut Option<HitFeedback>,
    current_tick: u64,
) {
    let profile = match world.get::<&TargetProfile>(hit.entity) {
        Ok(profile) => *profile,
        Err(_) => return,
    };

    {
        let mut status = match world.get::<&mut TargetStatus>(hit.entity) {
            Ok(status) => status,
            Err(_) => return,
        };
        if !status.alive {
            return;
        }
        status.flash_remaining_secs = HIT_FLASH_SECS;
    }

    let mut killed = false;
    {
        let mut health = match world.get::<&mut Health>(hit.entity) {
            Ok(health) => health,
            Err(_) => return,
        };
        health.current -= damage;
        if health.current <= 0.0 {
            killed = true;
        }
    }

    score.hits += 1;

    // Silhouettes score per hit by zone; block targets score on the kill.
    let mut down_points = profile.point_value;
    if profile.archetype == TargetArchetype::Silhouette {
        let points = match hit.zone {
            HitZone::Head => HEADSHOT_POINTS,
            HitZone::Body => BODYSHOT_POINTS,
        };
        score.award(points);
        if hit.zone == HitZone::Head {
            score.headshots += 1;
        }
        *hit_feedback = Some(HitFeedback {
            zone: hit.zone,
            points,
            remaining_secs: HIT_FEEDBACK_SECS,
        });
        down_points = points;
    }

    if killed {
        down_target(
            world,
            hit.entity,
            &profile,
            down_points,
            spawner,
            score,
            rng,
            next_target_id,
            audio_events,
            alerts,
            current_tick,
        );
    }
}

/// Take a target down: silhouettes linger briefly then despawn and the
/// spawner fields exactly one replacement; block targets go on the
/// respawn clock.
#[allow(clippy::too_many_arguments)]
fn down_target(
    world: &mut World,
    entity: hecs::Entity,
    profile: &TargetProfile,
    points: u32,
    spawner: &mut SpawnerState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    alerts: &mut Vec<Alert>,
    current_tick: u64,
) {
    let spawner_managed = world.get::<&SpawnerManaged>(entity).is_ok();

    {
        let mut status = match world.get::<&mut TargetStatus>(entity) {
            Ok(status) => status,
            Err(_) => return,
        };
        status.alive = false;
        if spawner_managed {
            status.despawn_at_tick = Some(current_tick + secs_to_ticks(CORPSE_LINGER_SECS));
        } else {
            status.respawn_at_tick = Some(current_tick + secs_to_ticks(BLOCK_RESPAWN_SECS));
        }
    }

    score.targets_destroyed += 1;
    if profile.archetype != TargetArchetype::Silhouette {
        score.award(profile.point_value);
    }
    audio_events.push(AudioEvent::TargetDown {
        archetype: profile.archetype,
        points,
    });

    if spawner_managed {
        spawner.remove(entity);
        world_setup::spawn_silhouette(world, rng, spawner, next_target_id, alerts, current_tick);
    }
}
