//! Hit resolution — a single forward ray against every live target's
//! hit zones, nearest intersection wins.
//!
//! Geometry is analytic: spheres for heads and block bodies, a vertical
//! capsule for silhouette bodies.

use glam::DVec3;
use hecs::World;

use deadshot_core::components::{BodyZone, HitZones, LookDirection, RangeTarget, TargetStatus};
use deadshot_core::constants::EYE_HEIGHT;
use deadshot_core::enums::HitZone;
use deadshot_core::types::Position;

/// Resolved ray hit against a target.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub entity: hecs::Entity,
    pub zone: HitZone,
    /// Distance from the ray origin to the hit point.
    pub distance: f64,
    pub point: Position,
}

/// Build the view ray: origin at the eye point, unit direction from
/// yaw/pitch (yaw 0 = North, pitch positive = up).
pub fn view_ray(position: &Position, look: &LookDirection) -> (DVec3, DVec3) {
    let origin = DVec3::new(position.x, position.y, position.z + EYE_HEIGHT);
    let (sin_pitch, cos_pitch) = look.pitch.sin_cos();
    let (sin_yaw, cos_yaw) = look.yaw.sin_cos();
    let direction = DVec3::new(sin_yaw * cos_pitch, cos_yaw * cos_pitch, sin_pitch);
    (origin, direction)
}

/// Cast a ray against all live targets and return the nearest hit within
/// `max_range`. Dead targets are transparent.
pub fn resolve(world: &World, origin: DVec3, direction: DVec3, max_range: f64) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;

    let mut query = world.query::<(&RangeTarget, &Position, &HitZones, &TargetStatus)>();
    for (entity, (_target, pos, zones, status)) in query.iter() {
        if !status.alive {
            continue;
        }

        let base = DVec3::new(pos.x, pos.y, pos.z);

        let mut candidate: Option<(f64, HitZone)> = None;
        if let Some(head) = zones.head {
            let center = base + DVec3::new(0.0, 0.0, head.center_height);
            if let Some(t) = ray_sphere(origin, direction, center, head.radius) {
                candidate = Some((t, HitZone::Head));
            }
        }

        let body_t = match zones.body {
            BodyZone::Capsule {
                bottom,
                top,
                radius,
            } => ray_vertical_capsule(origin, direction, base, bottom, top, radius),
            BodyZone::Sphere {
                center_height,
                radius,
            } => {
                let center = base + DVec3::new(0.0, 0.0, center_height);
                ray_sphere(origin, direction, center, radius)
            }
        };
        if let Some(body_hit) = body_t {
            candidate = match candidate {
                Some((head_hit, zone)) if head_hit <= body_hit => Some((head_hit, zone)),
                _ => Some((body_hit, HitZone::Body)),
            };
        }

        if let Some((t, zone)) = candidate {
            if t <= max_range && best.map_or(true, |b| t < b.distance) {
                let point = origin + direction * t;
                best = Some(RayHit {
                    entity,
                    zone,
                    distance: t,
                    point: Position::new(point.x, point.y, point.z),
                });
            }
        }
    }

    best
}

/// Nearest positive intersection of a unit-direction ray with a sphere.
fn ray_sphere(origin: DVec3, direction: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let t = -b - discriminant.sqrt();
    (t > 0.0).then_some(t)
}

/// Nearest positive intersection with a vertical capsule: segment from
/// `base.z + bottom` to `base.z + top` on the target's axis, swept by
/// `radius`. Cylinder wall first, end-cap spheres after.
fn ray_vertical_capsule(
    origin: DVec3,
    direction: DVec3,
    base: DVec3,
    bottom: f64,
    top: f64,
    radius: f64,
) -> Option<f64> {
    let mut best: Option<f64> = None;

    let ox = origin.x - base.x;
    let oy = origin.y - base.y;
    let a = direction.x * direction.x + direction.y * direction.y;
    if a > 1e-12 {
        let b = ox * direction.x + oy * direction.y;
        let c = ox * ox + oy * oy - radius * radius;
        let discriminant = b * b - a * c;
        if discriminant >= 0.0 {
            let t = (-b - discriminant.sqrt()) / a;
            if t > 0.0 {
                let z = origin.z + direction.z * t;
                if z >= base.z + bottom && z <= base.z + top {
                    best = Some(t);
                }
            }
        }
    }

    for cap_height in [bottom, top] {
        let center = DVec3::new(base.x, base.y, base.z + cap_height);
        if let Some(t) = ray_sphere(origin, direction, center, radius) {
            if best.map_or(true, |b| t < b) {
                best = Some(t);
            }
        }
    }

    best
}
