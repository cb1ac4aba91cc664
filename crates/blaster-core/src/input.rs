//! Per-frame controller input supplied by the host.

use serde::{Deserialize, Serialize};

use crate::enums::Handedness;
use crate::types::Transform;

/// State of one connected controller for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerInput {
    pub hand: Handedness,
    /// Whether the trigger is held down this frame.
    pub trigger_pressed: bool,
    /// World transform of the emission point on the wielded blaster,
    /// if the host could resolve it this frame.
    pub emitter: Option<Transform>,
}

/// Everything the host reports about its input devices for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub controllers: Vec<ControllerInput>,
}

impl FrameInput {
    /// Input with a single controller connected.
    pub fn single(controller: ControllerInput) -> Self {
        Self {
            controllers: vec![controller],
        }
    }

    /// The controller held in `hand`, if connected.
    pub fn controller(&self, hand: Handedness) -> Option<&ControllerInput> {
        self.controllers.iter().find(|c| c.hand == hand)
    }
}
