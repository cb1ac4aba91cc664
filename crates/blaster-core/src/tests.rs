#[cfg(test)]
mod tests {
    use glam::{DQuat, DVec3};

    use crate::commands::SessionCommand;
    use crate::config::SessionConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::FrameEvent;
    use crate::input::{ControllerInput, FrameInput};
    use crate::state::FrameSnapshot;
    use crate::types::{Position, SimTime, Transform};

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.range_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_transform_points_down_negative_z() {
        let t = Transform::default();
        assert_eq!(t.forward(), DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_rotated_transform_forward() {
        // A quarter turn left (about +Y) swings -Z onto -X.
        let t = Transform::new(
            DVec3::ZERO,
            DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        );
        let f = t.forward();
        assert!((f - DVec3::new(-1.0, 0.0, 0.0)).length() < 1e-12, "got {f:?}");
    }

    #[test]
    fn test_sim_time_accumulates_variable_deltas() {
        let mut time = SimTime::default();
        time.advance(0.016, 10.016);
        time.advance(0.020, 10.036);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_secs - 0.036).abs() < 1e-12);
        assert!((time.wall_secs - 10.036).abs() < 1e-12);
    }

    #[test]
    fn test_frame_input_lookup_by_hand() {
        let input = FrameInput {
            controllers: vec![
                ControllerInput {
                    hand: Handedness::Left,
                    trigger_pressed: true,
                    emitter: None,
                },
                ControllerInput {
                    hand: Handedness::Right,
                    trigger_pressed: false,
                    emitter: Some(Transform::default()),
                },
            ],
        };
        assert!(input.controller(Handedness::Left).unwrap().trigger_pressed);
        assert!(input.controller(Handedness::Right).unwrap().emitter.is_some());
        assert!(input.controller(Handedness::None).is_none());
    }

    #[test]
    fn test_cue_assets() {
        assert_eq!(AudioCue::Laser.asset(), AssetKind::LaserSound);
        assert_eq!(AudioCue::Score.asset(), AssetKind::ScoreSound);
        assert_eq!(AssetKind::ALL.len(), 5);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_matches_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(config.projectile_lifetime_secs, 1.0);
        assert_eq!(config.hit_radius, 1.0);
        assert_eq!(config.points_per_hit, 10);
        assert_eq!(config.target_count, 3);
        assert_eq!(config.respawn_delay_secs, 1.0);
        assert_eq!(config.wielding_hand, Handedness::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_config_falls_back_to_defaults() {
        let config =
            SessionConfig::from_json_str(r#"{ "seed": 7, "target_count": 5 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.target_count, 5);
        assert_eq!(config.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(config.target_x_range, TARGET_X_RANGE);
    }

    #[test]
    fn test_config_rejects_zero_targets() {
        let err = SessionConfig::from_json_str(r#"{ "target_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "target_count",
                ..
            }
        ));
    }

    #[test]
    fn test_config_rejects_non_positive_speed() {
        let config = SessionConfig {
            projectile_speed: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("projectile_speed"), "{err}");
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let config = SessionConfig {
            target_z_range: [-5.0, -10.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "target_z_range",
                ..
            })
        ));
    }

    #[test]
    fn test_config_malformed_json() {
        let err = SessionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = SessionConfig::load(std::path::Path::new("/nonexistent/blaster.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/blaster.json"));
    }

    // ---- Serde ----

    #[test]
    fn test_session_command_serde() {
        for asset in AssetKind::ALL {
            let cmd = SessionCommand::AssetReady { asset };
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\":\"AssetReady\""), "{json}");
            let back: SessionCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_frame_event_serde() {
        let event = FrameEvent::TargetHit { slot: 2, score: 30 };
        let json = serde_json::to_string(&event).unwrap();
        let back: FrameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = FrameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.frame, 0);
        assert!(back.projectiles.is_empty());
        assert!(back.targets.is_empty());
    }
}
