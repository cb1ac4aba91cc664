//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which hand a controller is held in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Controller with no declared hand (e.g. a gaze/transient input source).
    None,
    Left,
    #[default]
    Right,
}

/// Assets the host loads on the core's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Backdrop model, added straight to the scene by the host.
    StationModel,
    /// Wielded blaster model, carries the projectile emission point.
    BlasterModel,
    /// Model cloned once per target slot.
    TargetModel,
    /// Cue played on every trigger pull.
    LaserSound,
    /// Cue played on every hit.
    ScoreSound,
}

impl AssetKind {
    /// Every asset, in the order the host is asked to load them.
    pub const ALL: [AssetKind; 5] = [
        AssetKind::StationModel,
        AssetKind::BlasterModel,
        AssetKind::TargetModel,
        AssetKind::LaserSound,
        AssetKind::ScoreSound,
    ];
}

/// One-shot audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    Laser,
    Score,
}

impl AudioCue {
    /// Asset that must be loaded before this cue can play.
    pub fn asset(self) -> AssetKind {
        match self {
            AudioCue::Laser => AssetKind::LaserSound,
            AudioCue::Score => AssetKind::ScoreSound,
        }
    }
}

/// Target visibility state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetState {
    /// Shown and eligible for collision.
    #[default]
    Visible,
    /// Hit and waiting for its respawn.
    Hidden,
}

/// Scale animations the host plays on targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleEffect {
    /// Scale down to nothing after a hit.
    Shrink,
    /// Scale back up after a respawn.
    Grow,
}
