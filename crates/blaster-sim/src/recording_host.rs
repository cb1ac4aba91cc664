//! Host double that records every call for assertions.

use std::collections::HashMap;

use glam::DVec3;

use blaster_core::enums::{AssetKind, AudioCue, Handedness, ScaleEffect};
use blaster_core::error::HapticError;
use blaster_core::types::{SceneHandle, Transform};

use crate::host::{AudioCues, Haptics, SceneGraph, ScoreSurface, TweenEffects};

#[derive(Debug, Default)]
pub struct RecordingHost {
    next_handle: u64,
    pub requested: Vec<AssetKind>,
    pub attached: Vec<Handedness>,
    /// Projectile nodes currently in the scene.
    pub live_nodes: HashMap<SceneHandle, DVec3>,
    pub added: u32,
    pub removed: Vec<SceneHandle>,
    /// Last placement per target slot: (position, visible).
    pub placements: HashMap<usize, (DVec3, bool)>,
    pub cues: Vec<AudioCue>,
    pub pulses: Vec<(Handedness, f64, u32)>,
    pub tweens: Vec<(usize, ScaleEffect, f64, f64)>,
    pub score_text: String,
    pub syncs: u32,
    /// When set, every haptic pulse fails.
    pub haptics_broken: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken_haptics() -> Self {
        Self {
            haptics_broken: true,
            ..Self::default()
        }
    }

    pub fn cue_count(&self, cue: AudioCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }

    pub fn tween_count(&self, effect: ScaleEffect) -> usize {
        self.tweens.iter().filter(|t| t.1 == effect).count()
    }
}

impl SceneGraph for RecordingHost {
    fn request_asset(&mut self, asset: AssetKind) {
        self.requested.push(asset);
    }

    fn attach_blaster(&mut self, hand: Handedness) {
        self.attached.push(hand);
    }

    fn add_projectile(&mut self, transform: &Transform) -> SceneHandle {
        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;
        self.added += 1;
        self.live_nodes.insert(handle, transform.position);
        handle
    }

    fn move_projectile(&mut self, handle: SceneHandle, position: DVec3) {
        if let Some(node) = self.live_nodes.get_mut(&handle) {
            *node = position;
        }
    }

    fn remove_projectile(&mut self, handle: SceneHandle) {
        assert!(
            self.live_nodes.remove(&handle).is_some(),
            "removed a projectile node that was not in the scene: {handle:?}"
        );
        self.removed.push(handle);
    }

    fn place_target(&mut self, slot: usize, position: DVec3, visible: bool) {
        self.placements.insert(slot, (position, visible));
    }
}

impl AudioCues for RecordingHost {
    fn restart(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

impl Haptics for RecordingHost {
    fn pulse(
        &mut self,
        hand: Handedness,
        intensity: f64,
        duration_ms: u32,
    ) -> Result<(), HapticError> {
        if self.haptics_broken {
            return Err(HapticError::NoActuator);
        }
        self.pulses.push((hand, intensity, duration_ms));
        Ok(())
    }
}

impl TweenEffects for RecordingHost {
    fn animate_scale(&mut self, slot: usize, effect: ScaleEffect, to: f64, duration_secs: f64) {
        self.tweens.push((slot, effect, to, duration_secs));
    }
}

impl ScoreSurface for RecordingHost {
    fn set_score_text(&mut self, text: &str) {
        self.score_text = text.to_string();
    }

    fn sync_score_text(&mut self) {
        self.syncs += 1;
    }
}
