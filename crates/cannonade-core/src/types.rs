//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in field space (pixels). x grows to the right, y grows downward.
pub type Vec2 = glam::DVec2;

/// Unit vector pointing along `angle` (radians).
pub fn direction(angle: f64) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Drop the fractional part of both components, rounding toward zero.
pub fn truncate(v: Vec2) -> Vec2 {
    v.trunc()
}

/// Angle (radians) of the ray from `from` to `to`.
pub fn angle_between(from: Vec2, to: Vec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const NAVY_BLUE: Color = Color::new(0, 0, 128);
    pub const BLUE_VIOLET: Color = Color::new(138, 43, 226);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Non-owning handle to a target living in the engine's entity arena.
///
/// The value is opaque outside the engine. A handle whose target has been
/// destroyed simply stops resolving; it is never reused for another target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u64);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{:x}", self.0)
    }
}

/// What an observer (the AI gunner) can see of a live target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSighting {
    pub id: TargetId,
    pub position: Vec2,
    pub radius: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick at the given tick rate (Hz).
    pub fn advance(&mut self, tick_rate: u32) {
        self.tick += 1;
        self.elapsed_secs += 1.0 / tick_rate.max(1) as f64;
    }
}
