//! Cleanup system: removes projectiles that have come to rest.

use hecs::{Entity, World};

use cannonade_core::projectile::Projectile;

/// Despawn every spent projectile. Returns how many were removed.
/// Uses a caller-owned buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
