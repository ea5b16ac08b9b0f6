//! Input delivered to the simulation by the input source.
//!
//! Discrete events are queued and processed at the next tick boundary.
//! The pointer is continuous state, sampled once per tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Key, MouseButton};
use crate::types::Vec2;

/// Discrete input events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Stop the simulation after this tick.
    Quit,
    KeyDown { key: Key },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },
}

/// Where the pointer is and whether it is over the play area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub focused: bool,
    pub position: Vec2,
}
