//! CANNONADE headless runner.
//!
//! Drives the simulation engine on its own thread at the configured tick
//! rate. Input arrives as JSON lines, frame snapshots leave as JSON lines.

pub mod config;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use cannonade_core as core;
