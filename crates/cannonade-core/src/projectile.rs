//! Shells and bombs: gravity-affected circles that bounce off the walls
//! until they come to rest on the floor.

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::constants::*;
use crate::enums::ShotKind;
use crate::types::{truncate, Color, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub color: Color,
    alive: bool,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, radius: f64, color: Color) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
            alive: true,
        }
    }

    /// A cannon shell. The shot kind scales the muzzle velocity and picks
    /// the radius; after construction all kinds behave the same.
    pub fn shell(kind: ShotKind, position: Vec2, velocity: Vec2, color: Color) -> Self {
        let (factor, radius) = match kind {
            ShotKind::Standard => (1.0, STANDARD_SHELL_RADIUS),
            ShotKind::Light => (LIGHT_SHELL_SPEED_FACTOR, LIGHT_SHELL_RADIUS),
            ShotKind::Heavy => (HEAVY_SHELL_SPEED_FACTOR, HEAVY_SHELL_RADIUS),
        };
        Self::new(position, velocity * factor, radius, color)
    }

    /// A bomb released straight down from `position`.
    pub fn bomb(position: Vec2) -> Self {
        Self::new(position, Vec2::new(0.0, BOMB_SPEED), BOMB_RADIUS, Color::RED)
    }

    /// False once the projectile has come to rest. Never turns true again.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Integrate one step: apply gravity, move, bounce off the walls,
    /// then check whether the projectile is spent.
    pub fn advance(&mut self, dt: f64, gravity: f64, field: &FieldConfig) {
        self.velocity.y += gravity;
        self.position += dt * self.velocity;
        self.reflect_off_walls(field);
        if self.is_spent(field) {
            self.alive = false;
        }
    }

    /// Inelastic rebound. Positions clamp to the wall; the perpendicular
    /// component flips and loses energy, the parallel one loses a little.
    /// Both are truncated toward zero so bounces die out.
    fn reflect_off_walls(&mut self, field: &FieldConfig) {
        for axis in 0..2 {
            let low = self.radius;
            let high = field.extent(axis) - self.radius;
            let wall = if self.position[axis] < low {
                low
            } else if self.position[axis] > high {
                high
            } else {
                continue;
            };
            self.position[axis] = wall;

            let other = 1 - axis;
            let mut scaled = self.velocity;
            scaled[axis] *= field.reflect_orthogonal;
            scaled[other] *= field.reflect_parallel;
            let scaled = truncate(scaled);
            self.velocity[axis] = -scaled[axis];
            self.velocity[other] = scaled[other];
        }
    }

    fn is_spent(&self, field: &FieldConfig) -> bool {
        self.velocity.length_squared() < SPENT_SPEED_SQ
            && self.position.y > field.height - 2.0 * self.radius
    }
}
