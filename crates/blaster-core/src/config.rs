//! Session configuration.
//!
//! Every field falls back to the tuning constants, so a config file only
//! needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Handedness;
use crate::error::ConfigError;

/// Tuning for one shooting session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for target placement. Same seed = same placements.
    pub seed: u64,
    pub projectile_speed: f64,
    pub projectile_lifetime_secs: f64,
    pub hit_radius: f64,
    pub points_per_hit: i64,
    pub target_count: usize,
    /// X range `[min, max)` for target placement.
    pub target_x_range: [f64; 2],
    /// Z range `(min, max]` for target placement.
    pub target_z_range: [f64; 2],
    pub target_base_y: f64,
    pub target_y_spacing: f64,
    pub respawn_delay_secs: f64,
    pub shrink_secs: f64,
    pub grow_secs: f64,
    pub haptic_intensity: f64,
    pub haptic_duration_ms: u32,
    /// Hand the blaster is attached to; only this hand can fire.
    pub wielding_hand: Handedness,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime_secs: PROJECTILE_LIFETIME_SECS,
            hit_radius: HIT_RADIUS,
            points_per_hit: POINTS_PER_HIT,
            target_count: TARGET_COUNT,
            target_x_range: TARGET_X_RANGE,
            target_z_range: TARGET_Z_RANGE,
            target_base_y: TARGET_BASE_Y,
            target_y_spacing: TARGET_Y_SPACING,
            respawn_delay_secs: TARGET_RESPAWN_DELAY_SECS,
            shrink_secs: TARGET_SHRINK_SECS,
            grow_secs: TARGET_GROW_SECS,
            haptic_intensity: HAPTIC_INTENSITY,
            haptic_duration_ms: HAPTIC_DURATION_MS,
            wielding_hand: Handedness::Right,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_lifetime_secs", self.projectile_lifetime_secs)?;
        positive("hit_radius", self.hit_radius)?;
        positive("respawn_delay_secs", self.respawn_delay_secs)?;
        non_negative("shrink_secs", self.shrink_secs)?;
        non_negative("grow_secs", self.grow_secs)?;
        if self.target_count == 0 {
            return Err(ConfigError::Invalid {
                field: "target_count",
                reason: "must be at least 1",
            });
        }
        ordered("target_x_range", self.target_x_range)?;
        ordered("target_z_range", self.target_z_range)?;
        if !(0.0..=1.0).contains(&self.haptic_intensity) {
            return Err(ConfigError::Invalid {
                field: "haptic_intensity",
                reason: "must be within 0.0..=1.0",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a positive number",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be zero or positive",
        })
    }
}

fn ordered(field: &'static str, range: [f64; 2]) -> Result<(), ConfigError> {
    if range[0].is_finite() && range[1].is_finite() && range[0] < range[1] {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be [min, max] with min < max",
        })
    }
}
