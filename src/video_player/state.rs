// SPDX-License-Identifier: MPL-2.0
//! Playback state and the player that drives one media element.
//!
//! [`VideoPlayer`] owns its element exclusively. User gestures go through
//! its methods, element callbacks come back as [`ElementEvent`]s, and both
//! keep [`PlaybackState`] in sync. Every operation is best-effort: refusals
//! from the element are logged and recorded as diagnostics, never returned.

use super::autoplay::{AutoplayDecision, AutoplayPolicy};
use super::controls_timer::ControlsTimer;
use super::seek::seek_target;
use super::time_units::{format_readout, sanitize_secs};
use crate::application::port::{MediaElement, MediaError};
use crate::config::{PlayerConfig, DEFAULT_KEYBOARD_SEEK_STEP_SECS};
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningType};
use crate::domain::video::Volume;
use iced::keyboard::{key, Key};
use iced::Rectangle;
use std::time::{Duration, Instant};

/// Transport state of one video element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Playhead position in seconds.
    pub current_time: f64,
    /// Media duration in seconds; 0 while unknown.
    pub duration: f64,
    /// End of the buffered range in seconds.
    pub buffered_end: f64,
    pub volume: Volume,
    pub muted: bool,
    pub controls_visible: bool,
    /// Set while the element waits for data.
    pub is_buffering: bool,
    pub is_fullscreen: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            buffered_end: 0.0,
            volume: Volume::default(),
            muted: false,
            controls_visible: true,
            is_buffering: false,
            is_fullscreen: false,
        }
    }
}

impl PlaybackState {
    /// Returns true once the element has reported a usable duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Playhead position as a ratio of the duration (0.0–1.0).
    ///
    /// Also the thumb position on the progress track.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.ratio_of(self.current_time)
    }

    /// Buffered range end as a ratio of the duration (0.0–1.0).
    #[must_use]
    pub fn buffered_ratio(&self) -> f64 {
        self.ratio_of(self.buffered_end)
    }

    /// The `current / total` readout, e.g. `1:01 / 3:05`.
    #[must_use]
    pub fn time_readout(&self) -> String {
        format_readout(self.current_time, self.duration)
    }

    /// Returns true if no sound is audible (muted or zero volume).
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume.is_silent()
    }

    fn ratio_of(&self, secs: f64) -> f64 {
        if !self.has_duration() {
            return 0.0;
        }
        (sanitize_secs(secs) / self.duration).clamp(0.0, 1.0)
    }
}

/// Callbacks a media element reports on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementEvent {
    /// Duration became known.
    LoadedMetadata { duration: f64 },
    /// The playhead moved during playback.
    TimeUpdate { current_time: f64 },
    /// More media data was buffered.
    Progress { buffered_end: f64 },
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback started or resumed.
    Playing,
    /// Playback paused.
    Paused,
    /// Playback reached the end.
    Ended,
    /// Volume or mute changed outside the player (e.g., native controls).
    VolumeChanged { volume: f32, muted: bool },
    /// The element entered or left fullscreen.
    FullscreenChanged(bool),
}

/// Player settings taken from `[player]` in the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub volume: Volume,
    pub muted: bool,
    pub controls_hide_delay: Duration,
    /// Arrow-key seek step in seconds.
    pub seek_step: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl PlayerSettings {
    #[must_use]
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            volume: config.volume.map(Volume::new).unwrap_or_default(),
            muted: config.muted.unwrap_or(false),
            controls_hide_delay: config.controls_hide_delay(),
            seek_step: config.keyboard_seek_step(),
        }
    }
}

/// Drives one media element and mirrors its transport state.
#[derive(Debug)]
pub struct VideoPlayer<E: MediaElement> {
    element: E,
    state: PlaybackState,
    controls: ControlsTimer,
    seek_step: f64,
    /// Present only for inline feed players.
    autoplay: Option<AutoplayPolicy>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<E: MediaElement> VideoPlayer<E> {
    /// Creates a player and applies the initial volume and mute state to
    /// the element.
    pub fn new(mut element: E, settings: PlayerSettings) -> Self {
        element.set_volume(settings.volume.value());
        element.set_muted(settings.muted);

        let state = PlaybackState {
            volume: settings.volume,
            muted: settings.muted,
            is_fullscreen: element.is_fullscreen(),
            ..PlaybackState::default()
        };

        let seek_step = if settings.seek_step.is_finite() && settings.seek_step > 0.0 {
            settings.seek_step
        } else {
            DEFAULT_KEYBOARD_SEEK_STEP_SECS
        };

        Self {
            element,
            state,
            controls: ControlsTimer::new(settings.controls_hide_delay),
            seek_step,
            autoplay: None,
            diagnostics: None,
        }
    }

    /// Enables autoplay-on-visibility (inline feed players).
    #[must_use]
    pub fn with_autoplay(mut self, policy: AutoplayPolicy) -> Self {
        self.autoplay = Some(policy);
        self
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Returns true for inline players that autoplay on visibility.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.autoplay.is_some()
    }

    /// When the controls will hide, if a hide is scheduled.
    #[must_use]
    pub fn controls_deadline(&self) -> Option<Instant> {
        self.controls.deadline()
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Plays if the element is paused, pauses otherwise.
    ///
    /// A refused play leaves the player not playing.
    pub fn toggle_play(&mut self, now: Instant) {
        self.log_action(UserAction::TogglePlayback);
        if self.element.is_paused() {
            self.start_playback(now);
        } else {
            self.pause_playback();
        }
    }

    /// Seeks to the pointer position on the progress track.
    ///
    /// Returns false if nothing happened (unknown duration, collapsed track).
    pub fn seek(&mut self, pointer_x: f32, track: Rectangle) -> bool {
        match seek_target(pointer_x, track, self.state.duration) {
            Some(target) => {
                self.seek_to(target);
                true
            }
            None => false,
        }
    }

    /// Seeks to a ratio of the duration (progress slider).
    pub fn seek_to_ratio(&mut self, ratio: f64) -> bool {
        if !self.state.has_duration() || ratio.is_nan() {
            return false;
        }
        self.seek_to(ratio.clamp(0.0, 1.0) * self.state.duration);
        true
    }

    /// Moves the playhead by `delta_secs`, staying within the media.
    pub fn seek_relative(&mut self, delta_secs: f64) -> bool {
        if !self.state.has_duration() || !delta_secs.is_finite() {
            return false;
        }
        let target = (self.state.current_time + delta_secs).clamp(0.0, self.state.duration);
        self.seek_to(target);
        true
    }

    /// Sets the output level. A positive level unmutes, zero mutes.
    pub fn set_volume(&mut self, ratio: f32) {
        let volume = Volume::new(ratio);
        let muted = volume.is_silent();

        self.element.set_volume(volume.value());
        self.element.set_muted(muted);
        self.state.volume = volume;
        self.state.muted = muted;

        self.log_action(UserAction::SetVolume {
            volume: volume.value(),
        });
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.state.muted;
        self.element.set_muted(muted);
        self.state.muted = muted;
        self.log_action(UserAction::ToggleMute);
    }

    /// Enters fullscreen, or leaves it if the element is already fullscreen.
    ///
    /// A refusal leaves the fullscreen flag unchanged.
    pub fn toggle_fullscreen(&mut self) {
        self.log_action(UserAction::ToggleFullscreen);
        let result = if self.element.is_fullscreen() {
            self.element.exit_fullscreen()
        } else {
            self.element.request_fullscreen()
        };

        match result {
            Ok(()) => self.state.is_fullscreen = self.element.is_fullscreen(),
            Err(err) => self.swallow(WarningType::FullscreenRejected, &err),
        }
    }

    /// Shows the controls on pointer movement and re-arms the hide timer.
    pub fn pointer_moved(&mut self, now: Instant) {
        self.controls.show(now, self.state.is_playing);
        self.state.controls_visible = self.controls.is_visible();
    }

    /// Advances the controls timer. Returns true if the controls just hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hid = self.controls.tick(now);
        self.state.controls_visible = self.controls.is_visible();
        hid
    }

    /// Applies an intersection-ratio change. Only inline players react.
    ///
    /// A refused play is not retried.
    pub fn visibility_changed(&mut self, visible_ratio: f32, now: Instant) {
        let Some(policy) = self.autoplay else {
            return;
        };

        match policy.decide(visible_ratio) {
            AutoplayDecision::Play if self.element.is_paused() => self.start_playback(now),
            AutoplayDecision::Pause if !self.element.is_paused() => self.pause_playback(),
            _ => {}
        }
    }

    /// Handles a key press. Returns true if the key was consumed.
    ///
    /// Space toggles playback, `m` mute and `f` fullscreen. Left/Right seek
    /// by the configured step, Up/Down change the volume by one step.
    pub fn handle_key(&mut self, key: &Key, now: Instant) -> bool {
        match key {
            Key::Named(key::Named::Space) => self.toggle_play(now),
            Key::Named(key::Named::ArrowLeft) => {
                self.seek_relative(-self.seek_step);
            }
            Key::Named(key::Named::ArrowRight) => {
                self.seek_relative(self.seek_step);
            }
            Key::Named(key::Named::ArrowUp) => self.set_volume(self.state.volume.increase().value()),
            Key::Named(key::Named::ArrowDown) => {
                self.set_volume(self.state.volume.decrease().value());
            }
            Key::Character(c) => match c.as_str() {
                "m" | "M" => self.toggle_mute(),
                "f" | "F" => self.toggle_fullscreen(),
                _ => return false,
            },
            _ => return false,
        }
        self.pointer_moved(now);
        true
    }

    // =========================================================================
    // Element Events
    // =========================================================================

    /// Mirrors an element callback into the playback state.
    pub fn apply_event(&mut self, event: ElementEvent, now: Instant) {
        match event {
            ElementEvent::LoadedMetadata { duration } => {
                self.state.duration = sanitize_secs(duration);
            }
            ElementEvent::TimeUpdate { current_time } => {
                self.state.current_time = sanitize_secs(current_time);
                self.state.is_buffering = false;
            }
            ElementEvent::Progress { buffered_end } => {
                self.state.buffered_end = sanitize_secs(buffered_end);
            }
            ElementEvent::Waiting => self.state.is_buffering = true,
            ElementEvent::Playing => {
                self.state.is_playing = true;
                self.state.is_buffering = false;
                // Fires again after stalls and seeks: arm, never reveal
                if self.controls.is_visible() && self.controls.deadline().is_none() {
                    self.controls.show(now, true);
                }
            }
            ElementEvent::Paused => {
                self.state.is_playing = false;
                self.controls.pin();
            }
            ElementEvent::Ended => {
                self.state.is_playing = false;
                self.state.is_buffering = false;
                if self.state.has_duration() {
                    self.state.current_time = self.state.duration;
                }
                self.controls.pin();
            }
            ElementEvent::VolumeChanged { volume, muted } => {
                self.state.volume = Volume::new(volume);
                self.state.muted = muted;
            }
            ElementEvent::FullscreenChanged(fullscreen) => {
                self.state.is_fullscreen = fullscreen;
            }
        }
        self.state.controls_visible = self.controls.is_visible();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn start_playback(&mut self, now: Instant) {
        match self.element.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.controls.show(now, true);
            }
            Err(err) => {
                self.state.is_playing = false;
                self.swallow(WarningType::PlayRejected, &err);
            }
        }
        self.state.controls_visible = self.controls.is_visible();
    }

    fn pause_playback(&mut self) {
        self.element.pause();
        self.state.is_playing = false;
        self.controls.pin();
        self.state.controls_visible = self.controls.is_visible();
    }

    fn seek_to(&mut self, target_secs: f64) {
        self.element.set_current_time(target_secs);
        self.state.current_time = target_secs;
        self.log_action(UserAction::SeekVideo {
            position_secs: target_secs,
        });
    }

    fn swallow(&self, warning_type: WarningType, err: &MediaError) {
        tracing::debug!("media element refused request: {err}");
        if let Some(handle) = &self.diagnostics {
            handle.log_warning_simple(warning_type, err.to_string());
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}
