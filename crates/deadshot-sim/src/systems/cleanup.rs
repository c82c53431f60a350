//! Cleanup system: removes dead silhouettes once their linger expires.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use deadshot_core::components::TargetStatus;

/// Despawn entities whose removal clock has expired.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, current_tick: u64) {
    despawn_buffer.clear();

    for (entity, status) in world.query_mut::<&TargetStatus>() {
        if matches!(status.despawn_at_tick, Some(tick) if current_tick >= tick) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
