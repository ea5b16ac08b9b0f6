//! Messages and options shared by the input reader and the game loop thread.

use cannonade_core::commands::{InputEvent, PointerState};
use cannonade_core::score::ScoreTracker;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A discrete input event to queue on the engine.
    Input(InputEvent),
    /// New pointer state, sampled at the next tick.
    Pointer(PointerState),
    /// Stop the game loop after the current tick.
    Shutdown,
}

/// How the game loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the tick rate.
    pub paced: bool,
    /// Write a snapshot line after every tick.
    pub emit_snapshots: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            paced: true,
            emit_snapshots: true,
        }
    }
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input source sent a quit event.
    Quit,
    /// `max_ticks` was reached.
    TickLimit,
    /// Shutdown was requested or every sender went away.
    Shutdown,
}

/// Final state reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub waves: u32,
    pub score: ScoreTracker,
    pub reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_paced_and_unbounded() {
        let options = LoopOptions::default();
        assert!(options.paced);
        assert!(options.emit_snapshots);
        assert_eq!(options.max_ticks, None);
    }
}
