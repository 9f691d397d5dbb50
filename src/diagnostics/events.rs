// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::media::MediaKind;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Playback Actions (Video)
    // ==========================================================================
    /// Toggle play/pause state.
    TogglePlayback,

    /// Seek to a specific position in the video.
    SeekVideo {
        /// Target position in seconds.
        position_secs: f64,
    },

    /// Change volume level.
    SetVolume {
        /// Volume level (0.0 to 1.0).
        volume: f32,
    },

    /// Toggle mute state.
    ToggleMute,

    /// Toggle fullscreen mode.
    ToggleFullscreen,

    // ==========================================================================
    // Image Actions
    // ==========================================================================
    /// Double-click zoom toggle.
    ToggleZoom {
        /// Scale after the toggle.
        scale: f32,
    },

    /// Reset zoom and pan.
    ResetZoom,

    // ==========================================================================
    // Viewer Shell
    // ==========================================================================
    /// Open the media viewer.
    OpenViewer { kind: MediaKind },

    /// Close the media viewer.
    CloseViewer { reason: CloseReason },

    // ==========================================================================
    // Feed
    // ==========================================================================
    /// Like or unlike a post.
    ToggleLike { post_id: String, liked: bool },

    /// Save or unsave a post.
    ToggleSave { post_id: String, saved: bool },
}

/// Why the viewer shell closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    CloseButton,
    EscapeKey,
    Backdrop,
}

/// Category of a swallowed failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The media element refused to start playback.
    PlayRejected,
    /// The fullscreen request or exit was refused.
    FullscreenRejected,
    /// A server answer arrived for a superseded request and was dropped.
    StaleServerResponse,
    /// An API call failed.
    ApiFailure,
    Other,
}

/// A warning with its category and a short message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },
    Warning {
        event: WarningEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_action_tag() {
        let json = serde_json::to_string(&UserAction::SeekVideo { position_secs: 1.5 })
            .expect("serialize");
        assert_eq!(json, r#"{"action":"seek_video","position_secs":1.5}"#);
    }

    #[test]
    fn open_viewer_serializes_media_kind_in_lowercase() {
        let json = serde_json::to_string(&UserAction::OpenViewer {
            kind: MediaKind::Image,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"action":"open_viewer","kind":"image"}"#);
    }

    #[test]
    fn warning_kind_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::PlayRejected, "autoplay blocked"),
        };
        let value = serde_json::to_value(&kind).expect("serialize");
        assert_eq!(value["type"], "warning");
        assert_eq!(value["event"]["warning_type"], "play_rejected");
    }
}
