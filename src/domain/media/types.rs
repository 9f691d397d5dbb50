// SPDX-License-Identifier: MPL-2.0
//! Media item types.

use serde::{Deserialize, Serialize};

/// Discriminates what the viewer shell has to host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Returns the wire name (`"video"` or `"image"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single piece of media attached to a post.
///
/// `src` is an opaque URL served by the API host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
}

impl MediaItem {
    #[must_use]
    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
        }
    }

    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_deserializes_from_api_json() {
        let item: MediaItem =
            serde_json::from_str(r#"{"kind":"video","src":"/uploads/clip.mp4"}"#)
                .expect("valid json");
        assert_eq!(item, MediaItem::video("/uploads/clip.mp4"));
        assert!(item.is_video());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_str::<MediaItem>(r#"{"kind":"audio","src":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn kind_displays_wire_name() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.as_str(), "video");
    }
}
