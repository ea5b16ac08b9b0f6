//! Core types and definitions for the CANNONADE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the entity types (projectiles, targets, cannons), their intrinsic
//! physics, input commands, simulation events, frame snapshots, and
//! configuration. It has no dependency on the entity store or any runtime.

pub mod cannon;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod projectile;
pub mod score;
pub mod state;
pub mod target;
pub mod types;
