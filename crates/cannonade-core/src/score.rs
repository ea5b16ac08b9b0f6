//! Score bookkeeping.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Targets destroyed by any projectile.
    pub destroyed: u32,
    /// Shells the player has fired.
    pub shots_used: u32,
    /// Shells the AI gunner has fired. Not charged to the player.
    pub ai_shots: u32,
}

impl ScoreTracker {
    pub fn score(&self) -> i64 {
        self.destroyed as i64 - self.shots_used as i64
    }

    /// Score clamped at zero; drives target shrinking.
    pub fn difficulty(&self) -> i64 {
        self.score().max(0)
    }
}
