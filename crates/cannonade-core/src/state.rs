//! Frame snapshot: everything the render sink needs after a tick.

use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::types::{Color, SimTime, Vec2};

/// Complete visible state after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// Number of the current wave (1-based, 0 before the first wave).
    pub wave: u32,
    /// The input source asked to stop.
    pub quit: bool,
    /// Draw requests in painting order.
    pub draw: Vec<DrawCommand>,
    pub score: ScoreView,
    /// Events raised during the tick.
    pub events: Vec<SimEvent>,
}

/// One primitive for the renderer. Shapes are filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f64,
        color: Color,
    },
    Rect {
        /// Top-left corner.
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Text {
        /// Top-left corner of the line.
        position: Vec2,
        text: String,
        color: Color,
    },
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub destroyed: u32,
    pub shots_used: u32,
    pub total: i64,
}
