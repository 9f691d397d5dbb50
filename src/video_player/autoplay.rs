// SPDX-License-Identifier: MPL-2.0
//! Autoplay-on-visibility policy for inline feed players.

use crate::config::DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD;

/// What an inline player should do after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayDecision {
    Play,
    Pause,
}

/// Starts playback once enough of the player is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayPolicy {
    threshold: f32,
}

impl AutoplayPolicy {
    /// Creates a policy. The threshold is clamped to (0, 1].
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(f32::EPSILON, 1.0)
        };
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Maps an intersection ratio (visible fraction, 0.0–1.0) to a decision.
    ///
    /// A non-finite ratio counts as not visible.
    #[must_use]
    pub fn decide(&self, visible_ratio: f32) -> AutoplayDecision {
        if visible_ratio.is_finite() && visible_ratio >= self.threshold {
            AutoplayDecision::Play
        } else {
            AutoplayDecision::Pause
        }
    }
}

impl Default for AutoplayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD)
    }
}
