//! Headless BLASTER RANGE runner.
//!
//! Drives the session engine on its own frame loop thread with a scripted
//! controller and a host that logs every side effect.

pub mod game_loop;
pub mod host;
pub mod script;
pub mod state;

pub use blaster_core as core;
