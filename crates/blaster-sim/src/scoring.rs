//! Score state: the running score and its fixed-width display.
//!
//! Stored in `SessionEngine`, NOT as an ECS entity.

use blaster_core::constants::{SCORE_DISPLAY_MAX, SCORE_DISPLAY_WIDTH};
use blaster_core::state::ScoreView;

use crate::host::ScoreSurface;

/// Running score for the session.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    score: i64,
    shots_fired: u32,
    hits: u32,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw score, unclamped.
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Add `points` to the score.
    pub fn add(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
    }

    /// Count a hit and award `points` for it.
    pub fn record_hit(&mut self, points: i64) {
        self.hits = self.hits.saturating_add(1);
        self.add(points);
    }

    pub fn record_shot(&mut self) {
        self.shots_fired = self.shots_fired.saturating_add(1);
    }

    /// Score as shown on the board: clamped to `0..=9999`, zero-padded to 4 digits.
    pub fn clamped_display(&self) -> String {
        format_score(self.score)
    }

    /// Write the display text to `surface` and re-sync it.
    pub fn push_display<S: ScoreSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_score_text(&self.clamped_display());
        surface.sync_score_text();
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            value: self.score,
            display: self.clamped_display(),
            shots_fired: self.shots_fired,
            hits: self.hits,
        }
    }
}

/// Clamp `score` into the displayable range and zero-pad it.
pub fn format_score(score: i64) -> String {
    let clamped = score.clamp(0, SCORE_DISPLAY_MAX);
    format!("{clamped:0width$}", width = SCORE_DISPLAY_WIDTH)
}
