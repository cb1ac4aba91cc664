//! Events emitted by the simulation for UI and telemetry.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::Handedness;

/// Something notable that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// Trigger pulled and a projectile left the emitter.
    ProjectileFired {
        hand: Handedness,
        position: DVec3,
        velocity: DVec3,
    },
    /// Trigger pulled but the emission point could not be resolved.
    MisFire { hand: Handedness },
    /// A projectile ran out of lifetime.
    ProjectileExpired { position: DVec3 },
    /// A projectile hit a target.
    TargetHit { slot: usize, score: i64 },
    /// A hidden target came back at a new position.
    TargetRespawned { slot: usize, position: DVec3 },
}
