//! Gunner system: lets the AI gunner observe the live targets and act.
//!
//! The gunner's decisions come from cannonade-ai; this system only builds
//! the sightings and spawns whatever shell comes back.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use cannonade_ai::AiController;
use cannonade_core::config::FieldConfig;
use cannonade_core::enums::Shooter;
use cannonade_core::events::SimEvent;
use cannonade_core::score::ScoreTracker;
use cannonade_core::target::Target;
use cannonade_core::types::TargetSighting;

use crate::world_setup;

/// Everything the gunner can see, in a stable order.
pub fn sightings(world: &World) -> Vec<TargetSighting> {
    let mut sightings: Vec<TargetSighting> = world
        .query::<&Target>()
        .iter()
        .map(|(entity, target)| TargetSighting {
            id: world_setup::target_id(entity),
            position: target.position,
            radius: target.radius,
        })
        .collect();
    sightings.sort_by_key(|s| s.id);
    sightings
}

pub fn run(
    world: &mut World,
    gunner: &mut AiController,
    field: &FieldConfig,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreTracker,
    events: &mut Vec<SimEvent>,
) {
    let visible = sightings(world);
    let outcome = gunner.update(&visible, field, rng);

    if let Some(target) = outcome.acquired {
        debug!(%target, "gunner acquired target");
        events.push(SimEvent::TargetAcquired { target });
    }

    if let Some(mut shell) = outcome.shell {
        shell.color = world_setup::random_color(rng);
        let speed = shell.speed();
        world_setup::spawn_projectile(world, shell, Shooter::Ai);
        score.ai_shots += 1;
        events.push(SimEvent::ShotFired {
            shooter: Shooter::Ai,
            speed,
        });
        debug!(speed, ai_shots = score.ai_shots, "gunner fired");
    }
}
