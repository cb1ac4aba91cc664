//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `SessionConfig`; hosts override them
//! through configuration rather than by editing this file.

use glam::DVec3;

/// Nominal host frame rate (Hz) used by the headless runner.
pub const FRAME_RATE: u32 = 72;

// --- Projectiles ---

/// Direction a projectile travels before the emitter rotation is applied.
pub const FORWARD: DVec3 = DVec3::NEG_Z;

/// Projectile speed (m/s).
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Projectile time to live (seconds).
pub const PROJECTILE_LIFETIME_SECS: f64 = 1.0;

// --- Targets ---

/// Number of target slots in the arena.
pub const TARGET_COUNT: usize = 3;

/// Hit radius around a target's origin (meters). Comparison is strict.
pub const HIT_RADIUS: f64 = 1.0;

/// Target X spawn range `[min, max)` (meters).
pub const TARGET_X_RANGE: [f64; 2] = [-5.0, 5.0];

/// Target Z spawn range `(min, max]` (meters).
pub const TARGET_Z_RANGE: [f64; 2] = [-10.0, -5.0];

/// Height of slot 0 (meters).
pub const TARGET_BASE_Y: f64 = 1.0;

/// Vertical spacing between slots (meters).
pub const TARGET_Y_SPACING: f64 = 2.0;

/// Real time between a hit and the target reappearing (seconds).
pub const TARGET_RESPAWN_DELAY_SECS: f64 = 1.0;

/// Duration of the shrink effect on hit (seconds).
pub const TARGET_SHRINK_SECS: f64 = 0.3;

/// Duration of the grow-back effect on respawn (seconds).
pub const TARGET_GROW_SECS: f64 = 0.3;

// --- Scoring ---

/// Points awarded per target hit.
pub const POINTS_PER_HIT: i64 = 10;

/// Largest value the score display can show.
pub const SCORE_DISPLAY_MAX: i64 = 9999;

/// Width of the zero-padded score display.
pub const SCORE_DISPLAY_WIDTH: usize = 4;

// --- Haptics ---

/// Trigger pulse intensity (0.0 - 1.0).
pub const HAPTIC_INTENSITY: f64 = 0.6;

/// Trigger pulse duration (milliseconds).
pub const HAPTIC_DURATION_MS: u32 = 100;

// --- Determinism ---

/// RNG seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;
