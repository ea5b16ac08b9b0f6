//! Targets: six movement variants sharing one collision contract.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::constants::*;
use crate::enums::{OrbitAnchor, TargetKind};
use crate::projectile::Projectile;
use crate::types::{direction, Color, Vec2};

/// Per-variant movement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TargetMotion {
    Static,
    LinearDrift {
        velocity: Vec2,
    },
    FastLinearDrift {
        velocity: Vec2,
    },
    Large,
    CircularOrbit {
        /// Pivot of the circle.
        center: Vec2,
        /// Current phase (radians).
        angle: f64,
        anchor: OrbitAnchor,
    },
    BombDropper {
        velocity: Vec2,
        /// Bombs released by this dropper. They go away with it.
        bombs: Vec<Projectile>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vec2,
    pub radius: f64,
    pub color: Color,
    pub motion: TargetMotion,
}

impl Target {
    pub fn new(position: Vec2, radius: f64, color: Color, motion: TargetMotion) -> Self {
        Self {
            position,
            radius,
            color,
            motion,
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self.motion {
            TargetMotion::Static => TargetKind::Static,
            TargetMotion::LinearDrift { .. } => TargetKind::LinearDrift,
            TargetMotion::FastLinearDrift { .. } => TargetKind::FastLinearDrift,
            TargetMotion::Large => TargetKind::Large,
            TargetMotion::CircularOrbit { .. } => TargetKind::CircularOrbit,
            TargetMotion::BombDropper { .. } => TargetKind::BombDropper,
        }
    }

    /// True when the projectile touches or overlaps this target.
    pub fn check_collision(&self, projectile: &Projectile) -> bool {
        self.position.distance(projectile.position) <= self.radius + projectile.radius
    }

    /// Bombs currently owned by this target (empty for non-droppers).
    pub fn bombs(&self) -> &[Projectile] {
        match &self.motion {
            TargetMotion::BombDropper { bombs, .. } => bombs,
            _ => &[],
        }
    }

    /// Move one tick according to the variant's rule.
    ///
    /// Returns true when a bomb dropper released a new bomb this tick.
    pub fn advance<R: Rng>(&mut self, field: &FieldConfig, rng: &mut R) -> bool {
        match &mut self.motion {
            TargetMotion::Static | TargetMotion::Large => false,
            TargetMotion::LinearDrift { velocity } | TargetMotion::FastLinearDrift { velocity } => {
                self.position += *velocity;
                false
            }
            TargetMotion::CircularOrbit {
                center,
                angle,
                anchor,
            } => {
                *angle += ORBIT_STEP_DEG.to_radians();
                let pivot = match anchor {
                    OrbitAnchor::Fixed => *center,
                    OrbitAnchor::Drifting => self.position,
                };
                self.position = pivot + self.radius * direction(*angle);
                if *anchor == OrbitAnchor::Drifting {
                    *center = self.position;
                }
                false
            }
            TargetMotion::BombDropper { velocity, bombs } => {
                self.position.x += velocity.x;
                self.position.y = self.radius;
                bounce_off_walls(&mut self.position, velocity, self.radius, field);

                let dropped = rng.gen_bool(BOMB_DROP_CHANCE);
                if dropped {
                    bombs.push(Projectile::bomb(self.position));
                }
                for bomb in bombs.iter_mut() {
                    bomb.advance(BOMB_TIME_STEP, BOMB_GRAVITY, field);
                }
                bombs.retain(Projectile::is_alive);
                dropped
            }
        }
    }
}

/// Elastic wall bounce for the dropper: clamp and flip the velocity sign.
fn bounce_off_walls(position: &mut Vec2, velocity: &mut Vec2, radius: f64, field: &FieldConfig) {
    for axis in 0..2 {
        let low = radius;
        let high = field.extent(axis) - radius;
        if position[axis] < low {
            position[axis] = low;
            velocity[axis] = -velocity[axis];
        } else if position[axis] > high {
            position[axis] = high;
            velocity[axis] = -velocity[axis];
        }
    }
}
