// SPDX-License-Identifier: MPL-2.0
//! Video playback control for the media viewer.
//!
//! The player does not decode anything itself. It drives a host media
//! element through the [`MediaElement`](crate::application::port::MediaElement)
//! port and keeps a mirror of its transport state for the controls view.

pub mod autoplay;
pub mod controls_timer;
pub mod seek;
mod state;
pub mod time_units;

pub use autoplay::{AutoplayDecision, AutoplayPolicy};
pub use controls_timer::ControlsTimer;
pub use state::{ElementEvent, PlaybackState, PlayerSettings, VideoPlayer};

use crate::application::port::MediaElement;
use crate::config::Config;

/// Creates a lightbox player for `element` using the `[player]` settings.
pub fn create_player<E: MediaElement>(element: E, config: &Config) -> VideoPlayer<E> {
    VideoPlayer::new(element, PlayerSettings::from_config(&config.player))
}

/// Creates an inline feed player that autoplays once visible enough.
pub fn create_inline_player<E: MediaElement>(element: E, config: &Config) -> VideoPlayer<E> {
    create_player(element, config)
        .with_autoplay(AutoplayPolicy::new(config.player.autoplay_threshold()))
}
