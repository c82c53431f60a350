//! Simulation engine for DEADSHOT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod loadout;
pub mod spawner;
pub mod systems;
pub mod world_setup;

pub use deadshot_core as core;
pub use engine::SimulationEngine;
