//! Scripted controller input for headless runs.

use glam::{DQuat, DVec3};

use blaster_core::constants::FORWARD;
use blaster_core::enums::{Handedness, TargetState};
use blaster_core::input::{ControllerInput, FrameInput};
use blaster_core::state::FrameSnapshot;
use blaster_core::types::Transform;

/// Source of per-frame controller input.
pub trait InputSource {
    /// Input for `frame`, given the snapshot produced by the previous frame.
    fn next_input(&mut self, frame: u64, latest: Option<&FrameSnapshot>) -> FrameInput;
}

/// A single controller that aims at the nearest visible target and pulls the
/// trigger on a fixed cadence.
#[derive(Debug, Clone)]
pub struct ScriptedController {
    hand: Handedness,
    muzzle: DVec3,
    fire_every: u64,
}

impl ScriptedController {
    /// `fire_every` is in frames. The trigger is held for one frame and
    /// released for the rest, so values below 2 are raised to 2.
    pub fn new(hand: Handedness, muzzle: DVec3, fire_every: u64) -> Self {
        Self {
            hand,
            muzzle,
            fire_every: fire_every.max(2),
        }
    }

    pub fn fire_every(&self) -> u64 {
        self.fire_every
    }

    fn pressed(&self, frame: u64) -> bool {
        frame % self.fire_every == 0
    }

    fn aim(&self, latest: Option<&FrameSnapshot>) -> DQuat {
        latest
            .and_then(|snapshot| {
                snapshot
                    .targets
                    .iter()
                    .filter(|t| t.state == TargetState::Visible)
                    .min_by(|a, b| {
                        let da = a.position.distance_squared(self.muzzle);
                        let db = b.position.distance_squared(self.muzzle);
                        da.total_cmp(&db)
                    })
            })
            .map(|target| aim_at(self.muzzle, target.position))
            .unwrap_or(DQuat::IDENTITY)
    }
}

impl InputSource for ScriptedController {
    fn next_input(&mut self, frame: u64, latest: Option<&FrameSnapshot>) -> FrameInput {
        FrameInput::single(ControllerInput {
            hand: self.hand,
            trigger_pressed: self.pressed(frame),
            emitter: Some(Transform::new(self.muzzle, self.aim(latest))),
        })
    }
}

/// Orientation that turns the forward axis toward `target`.
pub fn aim_at(from: DVec3, target: DVec3) -> DQuat {
    let dir = (target - from).normalize_or_zero();
    if dir == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    DQuat::from_rotation_arc(FORWARD, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaster_core::state::TargetView;

    fn snapshot_with(targets: Vec<TargetView>) -> FrameSnapshot {
        FrameSnapshot {
            targets,
            ..Default::default()
        }
    }

    #[test]
    fn test_aim_at_points_forward_at_target() {
        let from = DVec3::new(0.0, 1.0, 0.0);
        let target = DVec3::new(3.0, 2.0, -7.0);

        let forward = aim_at(from, target) * FORWARD;
        let expected = (target - from).normalize();
        assert!((forward - expected).length() < 1e-9, "{forward:?}");
    }

    #[test]
    fn test_aim_at_same_point_is_identity() {
        assert_eq!(aim_at(DVec3::ONE, DVec3::ONE), DQuat::IDENTITY);
    }

    #[test]
    fn test_trigger_cadence() {
        let mut script = ScriptedController::new(Handedness::Right, DVec3::ZERO, 3);
        let pressed: Vec<bool> = (0..7)
            .map(|f| script.next_input(f, None).controllers[0].trigger_pressed)
            .collect();
        assert_eq!(pressed, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_cadence_floor() {
        let script = ScriptedController::new(Handedness::Right, DVec3::ZERO, 0);
        assert_eq!(script.fire_every(), 2);
    }

    #[test]
    fn test_aims_at_nearest_visible_target() {
        let mut script = ScriptedController::new(Handedness::Right, DVec3::ZERO, 2);
        let snapshot = snapshot_with(vec![
            TargetView {
                slot: 0,
                position: DVec3::new(-4.0, 1.0, -6.0),
                state: TargetState::Hidden,
            },
            TargetView {
                slot: 1,
                position: DVec3::new(2.0, 3.0, -8.0),
                state: TargetState::Visible,
            },
            TargetView {
                slot: 2,
                position: DVec3::new(0.0, 5.0, -9.5),
                state: TargetState::Visible,
            },
        ]);

        let input = script.next_input(0, Some(&snapshot));
        let emitter = input.controllers[0].emitter.unwrap();
        let expected = DVec3::new(2.0, 3.0, -8.0).normalize();
        assert!((emitter.forward() - expected).length() < 1e-9);
        assert_eq!(input.controllers[0].hand, Handedness::Right);
    }

    #[test]
    fn test_no_targets_aims_straight_ahead() {
        let mut script = ScriptedController::new(Handedness::Right, DVec3::ZERO, 2);
        let input = script.next_input(1, Some(&snapshot_with(Vec::new())));
        let emitter = input.controllers[0].emitter.unwrap();
        assert!((emitter.forward() - FORWARD).length() < 1e-12);
    }
}
