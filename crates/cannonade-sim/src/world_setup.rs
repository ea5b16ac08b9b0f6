//! Entity spawn factories for the playing field.
//!
//! Targets are spawned as `(Target,)` and projectiles as `(Projectile, Shooter)`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cannonade_core::config::FieldConfig;
use cannonade_core::constants::*;
use cannonade_core::enums::{OrbitAnchor, Shooter, TargetKind};
use cannonade_core::projectile::Projectile;
use cannonade_core::target::{Target, TargetMotion};
use cannonade_core::types::{Color, TargetId, Vec2};

/// Uniformly random 24-bit color.
pub fn random_color(rng: &mut ChaCha8Rng) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Spawn radius for a target whose base radius is `base`.
///
/// Shrinks as difficulty grows and never drops below `MIN_TARGET_RADIUS`.
pub fn spawn_radius(rng: &mut ChaCha8Rng, base: i64, difficulty: i64) -> f64 {
    let low = (base - 2 * difficulty).max(MIN_TARGET_RADIUS);
    let high = (base - difficulty).max(MIN_TARGET_RADIUS);
    rng.gen_range(low..=high) as f64
}

/// Random integer coordinate at least `inset` away from both ends of `extent`.
fn coordinate(rng: &mut ChaCha8Rng, inset: i64, extent: f64) -> f64 {
    let high = (extent as i64 - inset).max(inset);
    rng.gen_range(inset..=high) as f64
}

fn random_point(rng: &mut ChaCha8Rng, inset: i64, field: &FieldConfig) -> Vec2 {
    let x = coordinate(rng, inset, field.width);
    let y = coordinate(rng, inset, field.height);
    Vec2::new(x, y)
}

fn random_velocity(rng: &mut ChaCha8Rng, limit: i64) -> Vec2 {
    let vx = rng.gen_range(-limit..=limit) as f64;
    let vy = rng.gen_range(-limit..=limit) as f64;
    Vec2::new(vx, vy)
}

/// Build a freshly spawned target of the given kind.
pub fn make_target(
    rng: &mut ChaCha8Rng,
    kind: TargetKind,
    difficulty: i64,
    field: &FieldConfig,
    anchor: OrbitAnchor,
) -> Target {
    let base = match kind {
        TargetKind::Large => LARGE_TARGET_BASE_RADIUS,
        _ => TARGET_BASE_RADIUS,
    };
    let radius = spawn_radius(rng, base, difficulty);

    let inset = match kind {
        TargetKind::CircularOrbit => ORBIT_SPAWN_MARGIN,
        _ => radius as i64,
    };
    let mut position = random_point(rng, inset, field);
    if kind == TargetKind::BombDropper {
        // Droppers patrol the ceiling.
        position.y = radius;
    }

    let (color, motion) = match kind {
        TargetKind::Static => (random_color(rng), TargetMotion::Static),
        TargetKind::Large => (random_color(rng), TargetMotion::Large),
        TargetKind::LinearDrift => {
            let color = random_color(rng);
            let velocity = random_velocity(rng, DRIFT_SPEED);
            (color, TargetMotion::LinearDrift { velocity })
        }
        TargetKind::FastLinearDrift => {
            let color = random_color(rng);
            let velocity = random_velocity(rng, FAST_DRIFT_SPEED);
            (color, TargetMotion::FastLinearDrift { velocity })
        }
        TargetKind::CircularOrbit => {
            let color = random_color(rng);
            let degrees: i64 = rng.gen_range(0..=360);
            let motion = TargetMotion::CircularOrbit {
                center: position,
                angle: (degrees as f64).to_radians(),
                anchor,
            };
            (color, motion)
        }
        TargetKind::BombDropper => {
            let velocity = random_velocity(rng, DRIFT_SPEED);
            let motion = TargetMotion::BombDropper {
                velocity,
                bombs: Vec::new(),
            };
            (Color::RED, motion)
        }
    };

    Target::new(position, radius, color, motion)
}

/// Spawn a random target of `kind` into the world.
pub fn spawn_random_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: TargetKind,
    difficulty: i64,
    field: &FieldConfig,
    anchor: OrbitAnchor,
) -> Entity {
    let target = make_target(rng, kind, difficulty, field, anchor);
    world.spawn((target,))
}

pub fn spawn_target(world: &mut World, target: Target) -> Entity {
    world.spawn((target,))
}

pub fn spawn_projectile(world: &mut World, projectile: Projectile, shooter: Shooter) -> Entity {
    world.spawn((projectile, shooter))
}

/// Handle for a target entity that crates without hecs can hold.
pub fn target_id(entity: Entity) -> TargetId {
    TargetId(entity.to_bits().get())
}

/// Entity behind a handle. `None` if the bits were never a valid entity.
pub fn target_entity(id: TargetId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
