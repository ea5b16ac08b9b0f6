//! Target acquisition.
//!
//! The gunner never owns a target. It remembers a `TargetId` and looks it
//! up in the current sightings every tick; a miss means the target is gone.

use rand::seq::SliceRandom;
use rand::Rng;

use cannonade_core::types::{TargetId, TargetSighting};

/// Find the sighting for `tracked`, if it is still live.
pub fn resolve(tracked: Option<TargetId>, sightings: &[TargetSighting]) -> Option<&TargetSighting> {
    let id = tracked?;
    sightings.iter().find(|s| s.id == id)
}

/// Pick a target uniformly at random. `None` when nothing is live.
///
/// Sightings must arrive in a stable order for runs to be reproducible.
pub fn select_target<R: Rng>(sightings: &[TargetSighting], rng: &mut R) -> Option<TargetId> {
    sightings.choose(rng).map(|s| s.id)
}
