//! The cannon: aim, charge, fire. Shared by the player and the AI gunner.

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::constants::*;
use crate::enums::ShotKind;
use crate::projectile::Projectile;
use crate::types::{angle_between, direction, Color, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    /// Pivot of the barrel. Only x ever changes.
    pub position: Vec2,
    /// Barrel direction (radians).
    pub angle: f64,
    pub power: f64,
    pub min_power: f64,
    pub max_power: f64,
    pub charging: bool,
    pub color: Color,
    pub shot: ShotKind,
}

impl Cannon {
    pub fn new(position: Vec2, color: Color, shot: ShotKind) -> Self {
        Self {
            position,
            angle: 0.0,
            power: CANNON_MIN_POWER,
            min_power: CANNON_MIN_POWER,
            max_power: CANNON_MAX_POWER,
            charging: false,
            color,
            shot,
        }
    }

    /// The player's cannon, parked at the left wall.
    pub fn player(field: &FieldConfig, shot: ShotKind) -> Self {
        let (left, _) = field.cannon_x_range();
        Self::new(Vec2::new(left, field.cannon_y()), Color::NAVY_BLUE, shot)
    }

    /// The AI gunner's cannon, parked at the right wall.
    pub fn opponent(field: &FieldConfig, shot: ShotKind) -> Self {
        let (_, right) = field.cannon_x_range();
        Self::new(Vec2::new(right, field.cannon_y()), Color::BLUE_VIOLET, shot)
    }

    pub fn is_idle(&self) -> bool {
        !self.charging
    }

    /// Start charging. Does nothing if already charging.
    pub fn activate(&mut self) {
        self.charging = true;
    }

    /// Add `increment` to the power while charging, saturating at max.
    pub fn gain(&mut self, increment: f64) {
        if self.charging {
            self.power = (self.power + increment).min(self.max_power);
        }
    }

    pub fn is_fully_charged(&self) -> bool {
        self.power >= self.max_power
    }

    /// Release a shell along the barrel at the current power and go idle.
    pub fn fire(&mut self) -> Projectile {
        let velocity = self.power * direction(self.angle);
        let shell = Projectile::shell(self.shot, self.position, velocity, self.color);
        self.power = self.min_power;
        self.charging = false;
        shell
    }

    /// Point the barrel at `target`.
    pub fn set_angle(&mut self, target: Vec2) {
        self.angle = angle_between(self.position, target);
    }

    /// Slide horizontally, staying `CANNON_MARGIN` away from both walls.
    pub fn move_by(&mut self, delta: f64, field: &FieldConfig) {
        let (left, right) = field.cannon_x_range();
        // Total even when the field is narrower than both margins.
        self.position.x = (self.position.x + delta).max(left).min(right);
    }
}
