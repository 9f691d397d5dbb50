// SPDX-License-Identifier: MPL-2.0
//! API entities as exchanged in JSON (camelCase field names).

use crate::domain::media::MediaItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post in the user's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub liked_by_me: bool,
    #[serde(default)]
    pub saved_by_me: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /posts/:id/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Body of `PATCH /profile/me`. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// The signed-in account returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Server answer to `POST /posts/:id/like`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: u32,
}

/// Server answer to `POST /posts/:id/save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_from_api_json() {
        let json = r#"{
            "id": "p1",
            "caption": "Hangar render",
            "media": [{"kind": "image", "src": "/uploads/hangar.png"}],
            "likesCount": 10,
            "commentsCount": 2,
            "likedByMe": false,
            "savedByMe": true,
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).expect("valid json");
        assert_eq!(post.likes_count, 10);
        assert!(post.saved_by_me);
        assert_eq!(post.media[0], MediaItem::image("/uploads/hangar.png"));
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let json = r#"{"id": "p2", "createdAt": "2024-05-01T12:00:00Z"}"#;
        let post: Post = serde_json::from_str(json).expect("valid json");
        assert_eq!(post.likes_count, 0);
        assert!(!post.liked_by_me);
        assert!(post.media.is_empty());
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            bio: Some("Hard-surface modeller".into()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"bio":"Hard-surface modeller"}"#);
    }

    #[test]
    fn like_response_uses_camel_case() {
        let response: LikeResponse =
            serde_json::from_str(r#"{"liked":true,"likesCount":11}"#).expect("valid json");
        assert_eq!(
            response,
            LikeResponse {
                liked: true,
                likes_count: 11
            }
        );
    }
}
