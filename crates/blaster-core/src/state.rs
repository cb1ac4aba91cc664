//! Frame snapshot: the complete visible state handed to the host after each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::TargetState;
use crate::events::FrameEvent;
use crate::types::SimTime;

/// Complete session state produced by every frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub projectiles: Vec<ProjectileView>,
    pub targets: Vec<TargetView>,
    pub score: ScoreView,
    pub events: Vec<FrameEvent>,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec3,
    pub velocity: DVec3,
    pub remaining_secs: f64,
}

/// A target slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub slot: usize,
    pub position: DVec3,
    pub state: TargetState,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    /// Raw score, unclamped.
    pub value: i64,
    /// Zero-padded, clamped text shown on the score board.
    pub display: String,
    pub shots_fired: u32,
    pub hits: u32,
}
