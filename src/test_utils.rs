// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scriptable media element.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{MediaElement, MediaError};

/// In-memory media element that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct FakeMediaElement {
    pub paused: bool,
    pub current_time: f64,
    pub volume: f32,
    pub muted: bool,
    pub fullscreen: bool,
    pub reject_play: bool,
    pub reject_fullscreen: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    started: bool,
}

impl FakeMediaElement {
    /// An element whose `play` always fails, like a blocked autoplay.
    pub fn rejecting_play() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    /// An element whose fullscreen requests always fail.
    pub fn rejecting_fullscreen() -> Self {
        Self {
            reject_fullscreen: true,
            ..Self::default()
        }
    }
}

impl MediaElement for FakeMediaElement {
    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if self.reject_play {
            return Err(MediaError::PlayRejected("NotAllowedError".into()));
        }
        self.started = true;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        !self.started || self.paused
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), MediaError> {
        if self.reject_fullscreen {
            return Err(MediaError::FullscreenRejected("denied".into()));
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), MediaError> {
        if self.reject_fullscreen {
            return Err(MediaError::FullscreenRejected("denied".into()));
        }
        self.fullscreen = false;
        Ok(())
    }
}
