//! DEADSHOT application shell.
//!
//! This crate wires the simulation engine to the outside world: a
//! fixed-rate game loop thread, a stdio JSON bridge for commands and
//! snapshots, and high-score persistence.

pub mod game_loop;
pub mod ipc;
pub mod persistence;
pub mod state;

pub use deadshot_core as core;
