//! Frame simulation for BLASTER RANGE.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces FrameSnapshots for the host.

pub mod engine;
pub mod host;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use blaster_core as core;
pub use engine::SessionEngine;
pub use host::Host;

#[cfg(test)]
mod recording_host;
