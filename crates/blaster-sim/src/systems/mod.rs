//! ECS systems that operate on the session world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus whatever host capability they need. They do not own state beyond
//! the small schedules and gates passed in by the engine.

pub mod collision;
pub mod input_gate;
pub mod projectiles;
pub mod respawn;
pub mod snapshot;
