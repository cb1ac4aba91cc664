//! Capabilities the host provides to the session.
//!
//! The session never renders, plays audio, drives devices or animates
//! anything itself. It calls these traits and moves on; none of the calls
//! block and only haptics can fail.

use glam::DVec3;

use blaster_core::enums::{AssetKind, AudioCue, Handedness, ScaleEffect};
use blaster_core::error::HapticError;
use blaster_core::types::{SceneHandle, Transform};

/// The renderable scene container.
pub trait SceneGraph {
    /// Start loading an asset. Completion comes back as
    /// `SessionCommand::AssetReady`.
    fn request_asset(&mut self, asset: AssetKind);

    /// Attach the blaster model to the controller in `hand` and hide that
    /// controller's own mesh.
    fn attach_blaster(&mut self, hand: Handedness);

    /// Add a projectile node at `transform` and return its handle.
    fn add_projectile(&mut self, transform: &Transform) -> SceneHandle;

    fn move_projectile(&mut self, handle: SceneHandle, position: DVec3);

    fn remove_projectile(&mut self, handle: SceneHandle);

    /// Place (or re-place) the target node for `slot` and show or hide it.
    fn place_target(&mut self, slot: usize, position: DVec3, visible: bool);
}

/// One-shot positional audio.
pub trait AudioCues {
    /// Stop `cue` if it is playing, then play it from the start.
    fn restart(&mut self, cue: AudioCue);
}

/// Controller vibration.
pub trait Haptics {
    fn pulse(
        &mut self,
        hand: Handedness,
        intensity: f64,
        duration_ms: u32,
    ) -> Result<(), HapticError>;
}

/// Fire-and-forget scale animations on target nodes.
pub trait TweenEffects {
    fn animate_scale(&mut self, slot: usize, effect: ScaleEffect, to: f64, duration_secs: f64);
}

/// The text surface showing the score.
pub trait ScoreSurface {
    fn set_score_text(&mut self, text: &str);

    /// Re-layout the text after `set_score_text`.
    fn sync_score_text(&mut self);
}

/// Everything the session needs from its host.
pub trait Host: SceneGraph + AudioCues + Haptics + TweenEffects + ScoreSurface {}

impl<T> Host for T where T: SceneGraph + AudioCues + Haptics + TweenEffects + ScoreSurface {}
