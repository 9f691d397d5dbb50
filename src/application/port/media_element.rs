// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the control surface of one
//! video element. A browser binding, a native decoder or a test double can
//! implement it.
//!
//! # Design Notes
//!
//! - The element is **exclusively owned** by one player instance
//! - Requests that a host may refuse (`play`, fullscreen) return a
//!   [`MediaError`]; the player swallows these, it never propagates them
//! - State the element discovers by itself (duration, buffering, time) is
//!   reported back through [`ElementEvent`](crate::video_player::ElementEvent)

use std::fmt;

// =============================================================================
// MediaError
// =============================================================================

/// Refusals a media element may report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Playback was refused (e.g., autoplay policy).
    PlayRejected(String),

    /// Entering or leaving fullscreen was refused.
    FullscreenRejected(String),

    /// The element cannot perform the operation at all.
    Unsupported,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::PlayRejected(msg) => write!(f, "Play rejected: {msg}"),
            MediaError::FullscreenRejected(msg) => write!(f, "Fullscreen rejected: {msg}"),
            MediaError::Unsupported => write!(f, "Operation not supported"),
        }
    }
}

impl std::error::Error for MediaError {}

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for a single video element.
///
/// # Lifecycle
///
/// 1. The host creates the element for a media `src` and hands it to a player
/// 2. The player issues commands through this trait
/// 3. The host forwards element callbacks to the player as events
/// 4. Dropping the player drops the element
pub trait MediaElement {
    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::PlayRejected`] if the host refuses playback.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pauses playback. Pausing never fails.
    fn pause(&mut self);

    /// Returns true if the element is paused (or never started).
    fn is_paused(&self) -> bool;

    /// Moves the playhead to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Sets the output level (already clamped to 0.0–1.0).
    fn set_volume(&mut self, volume: f32);

    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);

    /// Returns true if the element is currently displayed fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Requests fullscreen presentation of this element.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::FullscreenRejected`] if the host refuses.
    fn request_fullscreen(&mut self) -> Result<(), MediaError>;

    /// Leaves fullscreen presentation.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::FullscreenRejected`] if the host refuses.
    fn exit_fullscreen(&mut self) -> Result<(), MediaError>;
}
