//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Target variant, without its per-variant movement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetKind {
    /// Never moves.
    Static,
    /// Drifts with a small constant integer velocity.
    LinearDrift,
    /// Drifts with a large constant integer velocity.
    FastLinearDrift,
    /// Never moves, spawns with a much larger radius.
    Large,
    /// Circles around a pivot.
    CircularOrbit,
    /// Slides along the top wall and drops bombs.
    BombDropper,
}

impl TargetKind {
    pub const ALL: [TargetKind; 6] = [
        TargetKind::Static,
        TargetKind::LinearDrift,
        TargetKind::FastLinearDrift,
        TargetKind::Large,
        TargetKind::CircularOrbit,
        TargetKind::BombDropper,
    ];
}

/// Shell variant chosen by a cannon. Only affects construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotKind {
    #[default]
    Standard,
    /// Small and fast.
    Light,
    /// Big and slow.
    Heavy,
}

/// Where an orbiting target's pivot sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitAnchor {
    /// Pivot captured at spawn; the target traces a stationary circle.
    #[default]
    Fixed,
    /// Pivot is the target's previous position; the circle translates.
    Drifting,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shooter {
    Player,
    Ai,
}

/// Keyboard keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

/// Pointer buttons. Only `Left` drives the cannon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}
