//! Input gate: turns held triggers into discrete fire events.
//!
//! A trigger fires on the frame it goes down and not again until it has been
//! released, so holding the trigger never spawns a stream of projectiles.

use std::collections::HashMap;

use tracing::{debug, trace};

use blaster_core::config::SessionConfig;
use blaster_core::enums::{AudioCue, Handedness};
use blaster_core::input::FrameInput;
use blaster_core::types::Transform;

use crate::host::{AudioCues, Haptics, SceneGraph};

/// Edge-detection state carried between frames.
#[derive(Debug, Clone, Default)]
pub struct InputGate {
    /// Trigger state seen on the previous frame, per connected hand.
    previous: HashMap<Handedness, bool>,
    /// Hand the blaster is currently attached to.
    attached: Option<Handedness>,
}

/// A trigger pull that passed the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPull {
    pub hand: Handedness,
    /// Emission point, if it could be resolved this frame.
    pub emitter: Option<Transform>,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's trigger state for `hand` and report whether it
    /// is a fresh press.
    pub fn fire_edge(&mut self, hand: Handedness, pressed: bool) -> bool {
        let was_pressed = self.previous.insert(hand, pressed).unwrap_or(false);
        pressed && !was_pressed
    }
}

/// Readiness of the assets a trigger pull depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateAssets {
    /// The blaster model (and the emission point inside it) is loaded.
    pub blaster: bool,
    /// The laser cue buffer is loaded.
    pub laser: bool,
}

/// Run the gate for one frame.
///
/// Returns the trigger pull from the wielding hand, if one happened. The
/// haptic pulse and laser cue are fired here; spawning is left to the
/// caller. A pull whose emitter is unresolved still counts as a pull.
pub fn run<H>(
    gate: &mut InputGate,
    input: &FrameInput,
    config: &SessionConfig,
    assets: GateAssets,
    host: &mut H,
) -> Option<TriggerPull>
where
    H: SceneGraph + AudioCues + Haptics + ?Sized,
{
    // Controllers that disconnected start fresh when they come back.
    gate.previous
        .retain(|hand, _| input.controller(*hand).is_some());
    if let Some(hand) = gate.attached {
        if input.controller(hand).is_none() {
            gate.attached = None;
        }
    }

    let mut pull = None;
    for controller in &input.controllers {
        let fresh = gate.fire_edge(controller.hand, controller.trigger_pressed);
        if controller.hand != config.wielding_hand {
            continue;
        }

        if gate.attached != Some(controller.hand) {
            host.attach_blaster(controller.hand);
            gate.attached = Some(controller.hand);
            debug!(hand = ?controller.hand, "blaster attached");
        }

        if !fresh || pull.is_some() {
            continue;
        }

        if let Err(err) = host.pulse(
            controller.hand,
            config.haptic_intensity,
            config.haptic_duration_ms,
        ) {
            trace!(hand = ?controller.hand, %err, "haptic pulse failed");
        }

        if assets.laser {
            host.restart(AudioCue::Laser);
        }

        pull = Some(TriggerPull {
            hand: controller.hand,
            emitter: controller.emitter.filter(|_| assets.blaster),
        });
    }
    pull
}
