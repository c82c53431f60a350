//! Entity spawn factories for setting up the range world.
//!
//! Creates the player, the fixed rack of block targets, and
//! spawner-managed silhouettes.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use deadshot_core::components::*;
use deadshot_core::constants::*;
use deadshot_core::enums::{AlertLevel, TargetArchetype};
use deadshot_core::events::Alert;
use deadshot_core::types::Position;

use crate::loadout::WeaponSpec;
use crate::spawner::SpawnerState;

/// Set up a fresh round: player, block-target rack, and the initial
/// silhouette population.
pub fn setup_range(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut SpawnerState,
    next_target_id: &mut u32,
    alerts: &mut Vec<Alert>,
    current_tick: u64,
    loadout: &[WeaponSpec],
) {
    spawn_player(world, loadout);

    // Fixed rack along the back line, behind the silhouette area.
    let rack = [
        (TargetArchetype::Basic, -6.0),
        (TargetArchetype::Armored, -2.0),
        (TargetArchetype::Fast, 2.0),
        (TargetArchetype::Giant, 6.0),
    ];
    for (archetype, x) in rack {
        spawn_block_target(world, next_target_id, archetype, Position::new(x, 10.0, 0.0));
    }

    while !spawner.at_capacity() {
        if spawn_silhouette(world, rng, spawner, next_target_id, alerts, current_tick).is_none() {
            break;
        }
    }
}

/// Spawn the player south of the range, facing North, first weapon loaded.
pub fn spawn_player(world: &mut World, loadout: &[WeaponSpec]) -> hecs::Entity {
    let ammo = loadout.first().map(|spec| spec.magazine).unwrap_or(0);

    world.spawn((
        Player,
        Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, 0.0),
        LookDirection::default(),
        MoveIntent::default(),
        PlayerKinematics::default(),
        WeaponState {
            slot: 0,
            ammo,
            cooldown_remaining_secs: 0.0,
            reload_remaining_secs: None,
            trigger_held: false,
        },
    ))
}

/// Spawn one silhouette at a sampled position and register it with the
/// spawner. Returns `None` when the spawner is at capacity.
pub fn spawn_silhouette(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut SpawnerState,
    next_target_id: &mut u32,
    alerts: &mut Vec<Alert>,
    current_tick: u64,
) -> Option<hecs::Entity> {
    if spawner.at_capacity() {
        return None;
    }

    let player_pos = player_position(world);
    let existing: Vec<Position> = spawner
        .active
        .iter()
        .filter_map(|e| world.get::<&Position>(*e).ok().map(|p| *p))
        .collect();

    let (position, fell_back) = spawner.sample_spawn_position(rng, &existing, &player_pos);
    if fell_back {
        alerts.push(Alert {
            level: AlertLevel::Warning,
            message: "silhouette placement fell back to last sample".to_string(),
            tick: current_tick,
        });
    }

    Some(spawn_silhouette_at(world, spawner, next_target_id, position))
}

/// Spawn a silhouette at an exact position and register it with the spawner.
pub fn spawn_silhouette_at(
    world: &mut World,
    spawner: &mut SpawnerState,
    next_target_id: &mut u32,
    position: Position,
) -> hecs::Entity {
    let id = *next_target_id;
    *next_target_id += 1;

    let entity = world.spawn((
        RangeTarget,
        SpawnerManaged,
        position,
        TargetProfile {
            id,
            archetype: TargetArchetype::Silhouette,
            point_value: 0,
        },
        Health {
            current: 1.0,
            max: 1.0,
        },
        TargetStatus {
            alive: true,
            ..Default::default()
        },
        HitZones {
            head: Some(HeadZone {
                center_height: SILHOUETTE_HEAD_HEIGHT,
                radius: SILHOUETTE_HEAD_RADIUS,
            }),
            body: BodyZone::Capsule {
                bottom: SILHOUETTE_BODY_BOTTOM,
                top: SILHOUETTE_BODY_TOP,
                radius: SILHOUETTE_BODY_RADIUS,
            },
        },
    ));

    spawner.active.push(entity);
    entity
}

/// Spawn a block target at a fixed position.
pub fn spawn_block_target(
    world: &mut World,
    next_target_id: &mut u32,
    archetype: TargetArchetype,
    position: Position,
) -> hecs::Entity {
    let (max_health, point_value, radius, roam) = block_archetype_params(archetype);

    let id = *next_target_id;
    *next_target_id += 1;

    let entity = world.spawn((
        RangeTarget,
        position,
        TargetProfile {
            id,
            archetype,
            point_value,
        },
        Health {
            current: max_health,
            max: max_health,
        },
        TargetStatus {
            alive: true,
            ..Default::default()
        },
        HitZones {
            head: None,
            body: BodyZone::Sphere {
                center_height: radius,
                radius,
            },
        },
        HomePoint { position },
    ));

    if let Some((speed, range)) = roam {
        let _ = world.insert_one(
            entity,
            Roam {
                speed,
                range,
                waypoint: position,
            },
        );
    }

    entity
}

/// Find the player position (used for spawn clearance checks).
pub fn player_position(world: &World) -> Position {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
        .unwrap_or_default()
}

/// Parameters for a block archetype: (max health, points on kill,
/// hit-sphere radius, roam (speed, range)).
fn block_archetype_params(archetype: TargetArchetype) -> (f64, u32, f64, Option<(f64, f64)>) {
    match archetype {
        TargetArchetype::Basic => (50.0, 10, 0.5, None),
        TargetArchetype::Armored => (150.0, 25, 0.5, None),
        TargetArchetype::Fast => (30.0, 20, 0.35, Some((4.0, 5.0))),
        TargetArchetype::Giant => (300.0, 50, 1.0, None),
        // Silhouettes are built by spawn_silhouette, not from this table.
        TargetArchetype::Silhouette => (1.0, 0, 0.3, None),
    }
}
