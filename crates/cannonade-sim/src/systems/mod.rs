//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Any state they need besides components is passed in by the engine.

pub mod cleanup;
pub mod collision;
pub mod gunner;
pub mod input;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
