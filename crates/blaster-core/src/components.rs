//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::SceneHandle;

/// Marks a live projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Scene node the host rendered for this projectile.
    pub handle: SceneHandle,
}

/// Remaining time to live.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    /// Seconds left. The projectile is pruned once this drops below zero.
    pub remaining_secs: f64,
}

/// A fixed target slot in the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetSlot {
    /// Slot index; also selects the target's height.
    pub slot: usize,
    /// Eligible for collision only while true.
    pub visible: bool,
    /// Bumped on every hit. A scheduled respawn only applies if it still matches.
    pub generation: u32,
}
