//! Core types and definitions for the BLASTER RANGE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, frame input, snapshots, events, configuration
//! and constants. It has no dependency on any host runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
