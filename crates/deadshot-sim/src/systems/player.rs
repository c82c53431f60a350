//! Player kinematics system.
//!
//! Applies held movement input rotated by the view yaw, integrates
//! gravity, and clamps the player to the ground plane at z = 0.

use hecs::World;

use deadshot_core::components::{LookDirection, MoveIntent, Player, PlayerKinematics};
use deadshot_core::constants::{DT, GRAVITY, JUMP_HEIGHT, RUN_SPEED, WALK_SPEED};
use deadshot_core::types::Position;

/// Run player movement for one tick.
pub fn run(world: &mut World) {
    for (_entity, (_player, pos, look, intent, kin)) in world.query_mut::<(
        &Player,
        &mut Position,
        &LookDirection,
        &MoveIntent,
        &mut PlayerKinematics,
    )>() {
        // Horizontal movement in the view frame. Yaw 0 faces North (+y),
        // right is East (+x).
        let (sin_yaw, cos_yaw) = look.yaw.sin_cos();
        let mut move_x = sin_yaw * intent.forward + cos_yaw * intent.strafe;
        let mut move_y = cos_yaw * intent.forward - sin_yaw * intent.strafe;

        // Diagonals are normalized, smaller inputs pass through.
        let magnitude = (move_x * move_x + move_y * move_y).sqrt();
        if magnitude > 1.0 {
            move_x /= magnitude;
            move_y /= magnitude;
        }

        let speed = if intent.running { RUN_SPEED } else { WALK_SPEED };
        pos.x += move_x * speed * DT;
        pos.y += move_y * speed * DT;

        // Vertical: gravity integration with a hard floor at z = 0.
        kin.vertical_speed -= GRAVITY * DT;
        pos.z += kin.vertical_speed * DT;
        if pos.z <= 0.0 {
            pos.z = 0.0;
            kin.vertical_speed = 0.0;
            kin.grounded = true;
        } else {
            kin.grounded = false;
        }
    }
}

/// Launch the player upward if grounded.
pub fn jump(world: &mut World) {
    for (_entity, (_player, kin)) in world.query_mut::<(&Player, &mut PlayerKinematics)>() {
        if kin.grounded {
            kin.vertical_speed = (2.0 * GRAVITY * JUMP_HEIGHT).sqrt();
            kin.grounded = false;
        }
    }
}
