//! Collision system: every live projectile against every target.
//!
//! A target touched by any number of projectiles is removed once and
//! counted once. Projectiles survive their hits.

use hecs::{Entity, World};
use tracing::debug;

use cannonade_core::events::SimEvent;
use cannonade_core::projectile::Projectile;
use cannonade_core::score::ScoreTracker;
use cannonade_core::target::Target;

/// Resolve hits. Returns the number of targets destroyed this tick.
pub fn run(
    world: &mut World,
    score: &mut ScoreTracker,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    {
        let mut projectile_query = world.query::<&Projectile>();
        let projectiles: Vec<&Projectile> = projectile_query.iter().map(|(_, p)| p).collect();

        for (entity, target) in world.query::<&Target>().iter() {
            if projectiles.iter().any(|p| target.check_collision(p)) {
                despawn_buffer.push(entity);
                events.push(SimEvent::TargetDestroyed {
                    kind: target.kind(),
                    position: target.position,
                });
                debug!(
                    kind = ?target.kind(),
                    x = target.position.x,
                    y = target.position.y,
                    "target destroyed"
                );
            }
        }
    }

    let mut destroyed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            destroyed += 1;
        }
    }
    score.destroyed += destroyed;
    destroyed
}
