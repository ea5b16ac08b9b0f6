//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Shooter, TargetKind};
use crate::types::{TargetId, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A cannon released a shell.
    ShotFired { shooter: Shooter, speed: f64 },
    /// A target was hit and removed.
    TargetDestroyed { kind: TargetKind, position: Vec2 },
    /// A fresh wave of targets appeared.
    WaveSpawned { wave: u32, targets: u32 },
    /// A bomb dropper released a bomb.
    BombDropped { position: Vec2 },
    /// The AI gunner locked onto a new target.
    TargetAcquired { target: TargetId },
}
