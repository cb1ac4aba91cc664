//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::constants::FORWARD;

/// 3D position in scene space (meters). y is up, -z points away from the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// 3D velocity in scene space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// World-space transform of a scene node or attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub orientation: DQuat,
}

/// Opaque handle to a node the host added to its scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneHandle(pub u64);

/// Frame clock.
///
/// Frames arrive at a variable rate, so elapsed time accumulates host deltas
/// rather than a fixed step. `wall_secs` is the host's absolute clock as of
/// the last completed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed frames.
    pub frame: u64,
    /// Sum of all frame deltas (seconds).
    pub elapsed_secs: f64,
    /// Host absolute time at the last frame (seconds).
    pub wall_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Euclidean distance to another position in meters.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unit vector this transform points along.
    pub fn forward(&self) -> DVec3 {
        self.orientation * FORWARD
    }
}

impl SimTime {
    /// Complete one frame of `delta_secs`, observed at host time `wall_secs`.
    pub fn advance(&mut self, delta_secs: f64, wall_secs: f64) {
        self.frame += 1;
        self.elapsed_secs += delta_secs;
        self.wall_secs = wall_secs;
    }
}
