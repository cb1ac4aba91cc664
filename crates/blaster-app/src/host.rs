//! Headless host: every side effect becomes a tracing event.
//!
//! Stands in for a renderer, audio device and XR runtime so the session can
//! run from the command line. Asset loads complete immediately; the runner
//! reports them back as `AssetReady` commands.

use std::collections::HashMap;

use glam::DVec3;
use tracing::{debug, info, trace};

use blaster_core::enums::{AssetKind, AudioCue, Handedness, ScaleEffect};
use blaster_core::error::HapticError;
use blaster_core::types::{SceneHandle, Transform};
use blaster_sim::host::{AudioCues, Haptics, SceneGraph, ScoreSurface, TweenEffects};

/// Counts kept by the logging host, reported at shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    pub projectiles_added: u64,
    pub projectiles_removed: u64,
    pub cues_played: u64,
    pub pulses: u64,
    pub tweens: u64,
}

#[derive(Debug, Default)]
pub struct LoggingHost {
    next_handle: u64,
    nodes: HashMap<SceneHandle, DVec3>,
    pending_assets: Vec<AssetKind>,
    wielding: Option<Handedness>,
    score_text: String,
    stats: HostStats,
}

impl LoggingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assets requested since the last call. The runner turns these into
    /// `AssetReady` notifications.
    pub fn take_requested_assets(&mut self) -> Vec<AssetKind> {
        std::mem::take(&mut self.pending_assets)
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn live_projectiles(&self) -> usize {
        self.nodes.len()
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }
}

impl SceneGraph for LoggingHost {
    fn request_asset(&mut self, asset: AssetKind) {
        debug!(?asset, "asset requested");
        self.pending_assets.push(asset);
    }

    fn attach_blaster(&mut self, hand: Handedness) {
        info!(?hand, "blaster attached to controller");
        self.wielding = Some(hand);
    }

    fn add_projectile(&mut self, transform: &Transform) -> SceneHandle {
        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(handle, transform.position);
        self.stats.projectiles_added += 1;
        trace!(?handle, position = ?transform.position, "projectile node added");
        handle
    }

    fn move_projectile(&mut self, handle: SceneHandle, position: DVec3) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            *node = position;
        }
    }

    fn remove_projectile(&mut self, handle: SceneHandle) {
        if self.nodes.remove(&handle).is_some() {
            self.stats.projectiles_removed += 1;
            trace!(?handle, "projectile node removed");
        }
    }

    fn place_target(&mut self, slot: usize, position: DVec3, visible: bool) {
        debug!(slot, ?position, visible, "target placed");
    }
}

impl AudioCues for LoggingHost {
    fn restart(&mut self, cue: AudioCue) {
        self.stats.cues_played += 1;
        trace!(?cue, "cue restarted");
    }
}

impl Haptics for LoggingHost {
    fn pulse(
        &mut self,
        hand: Handedness,
        intensity: f64,
        duration_ms: u32,
    ) -> Result<(), HapticError> {
        if self.wielding != Some(hand) {
            return Err(HapticError::NoActuator);
        }
        self.stats.pulses += 1;
        trace!(?hand, intensity, duration_ms, "haptic pulse");
        Ok(())
    }
}

impl TweenEffects for LoggingHost {
    fn animate_scale(&mut self, slot: usize, effect: ScaleEffect, to: f64, duration_secs: f64) {
        self.stats.tweens += 1;
        trace!(slot, ?effect, to, duration_secs, "scale tween");
    }
}

impl ScoreSurface for LoggingHost {
    fn set_score_text(&mut self, text: &str) {
        self.score_text = text.to_string();
    }

    fn sync_score_text(&mut self) {
        info!(score = %self.score_text, "score board");
    }
}
