//! Roaming system for moving targets.
//!
//! Walks each roaming target toward its waypoint; on arrival a new
//! waypoint is drawn on a circle around the home point.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use deadshot_core::components::{HomePoint, Roam, TargetStatus};
use deadshot_core::constants::{DT, ROAM_ARRIVE_EPS};
use deadshot_core::types::Position;

/// Run roaming movement for one tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    for (_entity, (pos, roam, home, status)) in
        world.query_mut::<(&mut Position, &mut Roam, &HomePoint, &TargetStatus)>()
    {
        if !status.alive {
            continue;
        }

        let dx = roam.waypoint.x - pos.x;
        let dy = roam.waypoint.y - pos.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let step = roam.speed * DT;

        if distance <= step {
            pos.x = roam.waypoint.x;
            pos.y = roam.waypoint.y;
        } else {
            pos.x += dx / distance * step;
            pos.y += dy / distance * step;
        }

        if pos.horizontal_range_to(&roam.waypoint) < ROAM_ARRIVE_EPS {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            roam.waypoint = Position::new(
                home.position.x + angle.sin() * roam.range,
                home.position.y + angle.cos() * roam.range,
                home.position.z,
            );
        }
    }
}
