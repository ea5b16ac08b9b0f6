//! Movement system.
//!
//! Integrates every live projectile under gravity and moves every target by
//! its own rule. Bomb droppers advance their bombs as part of their move.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use cannonade_core::config::FieldConfig;
use cannonade_core::constants::SHELL_TIME_STEP;
use cannonade_core::events::SimEvent;
use cannonade_core::projectile::Projectile;
use cannonade_core::target::Target;

/// Advance all projectiles and targets by one tick.
pub fn run(
    world: &mut World,
    field: &FieldConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.advance(SHELL_TIME_STEP, field.gravity, field);
    }

    for (_entity, target) in world.query_mut::<&mut Target>() {
        if target.advance(field, rng) {
            events.push(SimEvent::BombDropped {
                position: target.position,
            });
        }
    }
}
