//! The AI gunner: a cannon plus a handle to the target it is chasing.

use rand::Rng;

use cannonade_core::cannon::Cannon;
use cannonade_core::config::FieldConfig;
use cannonade_core::enums::ShotKind;
use cannonade_core::projectile::Projectile;
use cannonade_core::types::{TargetId, TargetSighting};

use crate::policy::{evaluate, GunnerContext};
use crate::selection::{resolve, select_target};

/// Result of one gunner update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GunnerOutcome {
    /// Set when the gunner switched to a new target this tick.
    pub acquired: Option<TargetId>,
    /// Shell released this tick. The caller takes ownership.
    pub shell: Option<Projectile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiController {
    pub cannon: Cannon,
    tracked: Option<TargetId>,
}

impl AiController {
    pub fn new(cannon: Cannon) -> Self {
        Self {
            cannon,
            tracked: None,
        }
    }

    /// Gunner parked at the right wall of `field`.
    pub fn opponent(field: &FieldConfig, shot: ShotKind) -> Self {
        Self::new(Cannon::opponent(field, shot))
    }

    pub fn tracked(&self) -> Option<TargetId> {
        self.tracked
    }

    /// Run one tick against the live targets.
    ///
    /// Re-acquires when the tracked target has disappeared, then moves,
    /// aims and charges the cannon. Fires once power reaches max.
    pub fn update<R: Rng>(
        &mut self,
        sightings: &[TargetSighting],
        field: &FieldConfig,
        rng: &mut R,
    ) -> GunnerOutcome {
        let mut outcome = GunnerOutcome::default();

        if resolve(self.tracked, sightings).is_none() {
            self.tracked = select_target(sightings, rng);
            outcome.acquired = self.tracked;
        }

        let orders = evaluate(
            &GunnerContext {
                cannon: &self.cannon,
                target: resolve(self.tracked, sightings),
            },
            rng,
        );

        if let Some(point) = orders.aim_at {
            self.cannon.set_angle(point);
        }
        if orders.step != 0.0 {
            self.cannon.move_by(orders.step, field);
        }
        if orders.activate {
            self.cannon.activate();
        }
        self.cannon.gain(orders.gain);
        if orders.fire {
            outcome.shell = Some(self.cannon.fire());
        }
        outcome
    }
}
