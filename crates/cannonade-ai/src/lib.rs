//! AI gunner for CANNONADE.
//!
//! Picks a target from what it can see, then walks, aims, charges and
//! fires its own cannon. The decision step is a pure function over plain
//! data; the controller applies the resulting orders to its cannon.

pub mod controller;
pub mod policy;
pub mod selection;

pub use cannonade_core as core;
pub use controller::{AiController, GunnerOutcome};

#[cfg(test)]
mod tests;
