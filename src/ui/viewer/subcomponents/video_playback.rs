// SPDX-License-Identifier: MPL-2.0
//! Video playback sub-component wrapping the `VideoPlayer`.

use crate::application::port::MediaElement;
use crate::diagnostics::DiagnosticsHandle;
use crate::ui::viewer::video_controls;
use crate::video_player::{ElementEvent, PlaybackState, VideoPlayer};
use iced::keyboard::Key;
use iced::Rectangle;
use std::time::Instant;

/// Video playback sub-component state.
#[derive(Debug)]
pub struct State<E: MediaElement> {
    player: VideoPlayer<E>,
}

/// Messages for the video playback sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle play/pause.
    TogglePlayback,
    /// Pointer pressed or dragged on the progress track.
    Scrub { pointer_x: f32, track: Rectangle },
    /// Seek to a ratio of the duration (0.0-1.0).
    SeekRatio(f64),
    /// Seek relative to the current position (seconds, can be negative).
    SeekRelative(f64),
    /// Set volume (clamped to 0.0-1.0).
    SetVolume(f32),
    /// Toggle mute state.
    ToggleMute,
    /// Toggle fullscreen.
    ToggleFullscreen,
    /// Pointer moved over the player.
    PointerMoved,
    /// Timer tick for controls auto-hide.
    Tick,
    /// Visible fraction of an inline player changed.
    VisibilityChanged(f32),
    /// Callback from the media element.
    Element(ElementEvent),
    /// Key pressed while the player has focus.
    KeyPressed(Key),
}

/// Effects produced by video playback changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Playback state changed - view needs refresh.
    StateChanged,
    /// Controls were shown or hidden.
    ControlsVisibilityChanged(bool),
    /// Fullscreen was entered or left.
    FullscreenChanged(bool),
}

impl From<video_controls::Message> for Message {
    fn from(msg: video_controls::Message) -> Self {
        match msg {
            video_controls::Message::TogglePlayback => Message::TogglePlayback,
            video_controls::Message::Seek(ratio) => Message::SeekRatio(ratio),
            video_controls::Message::SetVolume(volume) => Message::SetVolume(volume),
            video_controls::Message::ToggleMute => Message::ToggleMute,
            video_controls::Message::ToggleFullscreen => Message::ToggleFullscreen,
        }
    }
}

impl<E: MediaElement> State<E> {
    #[must_use]
    pub fn new(player: VideoPlayer<E>) -> Self {
        Self { player }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.player.set_diagnostics(handle);
    }

    /// Handle a video playback message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.handle_at(msg, Instant::now())
    }

    /// Handle a video playback message at a given instant.
    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        let before = self.player.state().clone();

        let handled = match msg {
            Message::TogglePlayback => {
                self.player.toggle_play(now);
                true
            }
            Message::Scrub { pointer_x, track } => self.player.seek(pointer_x, track),
            Message::SeekRatio(ratio) => self.player.seek_to_ratio(ratio),
            Message::SeekRelative(delta) => self.player.seek_relative(delta),
            Message::SetVolume(volume) => {
                self.player.set_volume(volume);
                true
            }
            Message::ToggleMute => {
                self.player.toggle_mute();
                true
            }
            Message::ToggleFullscreen => {
                self.player.toggle_fullscreen();
                true
            }
            Message::PointerMoved => {
                self.player.pointer_moved(now);
                true
            }
            Message::Tick => self.player.tick(now),
            Message::VisibilityChanged(ratio) => {
                self.player.visibility_changed(ratio, now);
                true
            }
            Message::Element(event) => {
                self.player.apply_event(event, now);
                true
            }
            Message::KeyPressed(key) => self.player.handle_key(&key, now),
        };

        if !handled {
            return Effect::None;
        }
        Self::effect_between(&before, self.player.state())
    }

    /// Classifies a state change. Visibility and fullscreen transitions
    /// take precedence over a plain refresh.
    fn effect_between(before: &PlaybackState, after: &PlaybackState) -> Effect {
        if before.is_fullscreen != after.is_fullscreen {
            Effect::FullscreenChanged(after.is_fullscreen)
        } else if before.controls_visible != after.controls_visible {
            Effect::ControlsVisibilityChanged(after.controls_visible)
        } else if before != after {
            Effect::StateChanged
        } else {
            Effect::None
        }
    }

    #[must_use]
    pub fn player(&self) -> &VideoPlayer<E> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut VideoPlayer<E> {
        &mut self.player
    }

    #[must_use]
    pub fn playback_state(&self) -> &PlaybackState {
        self.player.state()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.player.state().is_playing
    }

    /// Next instant at which a `Tick` would change anything.
    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.player.controls_deadline()
    }
}
