//! Simulation engine for CANNONADE.
//!
//! Owns the hecs world, runs systems once per tick, and produces
//! FrameSnapshots for the render sink.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use cannonade_ai as ai;
pub use cannonade_core as core;
pub use engine::{SimConfig, SimulationEngine};
