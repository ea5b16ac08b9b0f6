//! Wave spawning system: a fresh wave appears once the field is clear.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use cannonade_core::config::FieldConfig;
use cannonade_core::enums::{OrbitAnchor, TargetKind};
use cannonade_core::events::SimEvent;
use cannonade_core::projectile::Projectile;
use cannonade_core::target::Target;

/// Kinds spawned together, `count` times over.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveGroup {
    /// Spawned in this order on each repetition.
    pub kinds: Vec<TargetKind>,
    pub count: u32,
}

/// Composition of every wave. Waves differ only by target size.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePlan {
    pub groups: Vec<WaveGroup>,
}

impl WavePlan {
    /// Standard mission: drifters paired with statics, fast drifters paired
    /// with statics, then large, orbiting and bomb-dropping targets.
    pub fn standard(per_group: u32) -> Self {
        let group = |kinds: &[TargetKind]| WaveGroup {
            kinds: kinds.to_vec(),
            count: per_group,
        };
        Self {
            groups: vec![
                group(&[TargetKind::LinearDrift, TargetKind::Static]),
                group(&[TargetKind::FastLinearDrift, TargetKind::Static]),
                group(&[TargetKind::Large]),
                group(&[TargetKind::CircularOrbit]),
                group(&[TargetKind::BombDropper]),
            ],
        }
    }

    /// Total number of targets in one wave.
    pub fn total_targets(&self) -> u32 {
        self.groups
            .iter()
            .map(|g| g.kinds.len() as u32 * g.count)
            .sum()
    }

    /// How many targets of `kind` one wave holds.
    pub fn count_of(&self, kind: TargetKind) -> u32 {
        self.groups
            .iter()
            .map(|g| g.kinds.iter().filter(|&&k| k == kind).count() as u32 * g.count)
            .sum()
    }
}

/// True when no projectile and no target is left.
pub fn field_is_clear(world: &World) -> bool {
    world.query::<&Projectile>().iter().next().is_none()
        && world.query::<&Target>().iter().next().is_none()
}

/// Spawn one full wave and bump the wave counter.
#[allow(clippy::too_many_arguments)]
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    plan: &WavePlan,
    wave: &mut u32,
    difficulty: i64,
    field: &FieldConfig,
    anchor: OrbitAnchor,
    events: &mut Vec<SimEvent>,
) {
    for group in &plan.groups {
        for _ in 0..group.count {
            for &kind in &group.kinds {
                crate::world_setup::spawn_random_target(
                    world, rng, kind, difficulty, field, anchor,
                );
            }
        }
    }
    *wave += 1;
    let targets = plan.total_targets();
    debug!(wave = *wave, targets, difficulty, "wave spawned");
    events.push(SimEvent::WaveSpawned {
        wave: *wave,
        targets,
    });
}

/// Spawn the next wave if the field is clear. Returns true if it did.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    plan: &WavePlan,
    wave: &mut u32,
    difficulty: i64,
    field: &FieldConfig,
    anchor: OrbitAnchor,
    events: &mut Vec<SimEvent>,
) -> bool {
    if !field_is_clear(world) {
        return false;
    }
    spawn_wave(world, rng, plan, wave, difficulty, field, anchor, events);
    true
}
