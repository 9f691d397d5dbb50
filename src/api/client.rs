// SPDX-License-Identifier: MPL-2.0
//! Async client for the Vertex HTTP API.
//!
//! Requests carry the session cookie set by the server (credentialed
//! requests). Every method tags its failure with the [`Operation`] it
//! belongs to so the caller can show the matching inline message.

use crate::config::Config;
use crate::error::{ApiError, ApiErrorKind, Error, Operation};
use crate::feed::{AuthUser, Comment, LikeResponse, NewComment, Post, Profile, ProfileUpdate, SaveResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Multipart field name the avatar endpoint expects.
pub const AVATAR_FIELD: &str = "avatar";

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("http", &"<HttpClient>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client for `base_url` with its own cookie store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute
    /// hierarchical URL or if the HTTP client cannot be built (no TLS
    /// backend available).
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API base URL {base_url} cannot carry a path"
            )));
        }

        let http = Client::builder()
            .timeout(TIMEOUT)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, base_url })
    }

    /// Creates a client for the configured API location.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.api.resolved_base_url())
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // Session & Profile
    // =========================================================================

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<AuthUser, ApiError> {
        let request = self.request(Method::GET, &["auth", "me"]);
        self.fetch_json(Operation::LoadSession, request).await
    }

    /// `GET /profile/me`
    pub async fn my_profile(&self) -> Result<Profile, ApiError> {
        let request = self.request(Method::GET, &["profile", "me"]);
        self.fetch_json(Operation::LoadProfile, request).await
    }

    /// `PATCH /profile/me`. Returns the profile as stored by the server.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let request = self.request(Method::PATCH, &["profile", "me"]).json(update);
        self.fetch_json(Operation::SaveProfile, request).await
    }

    /// `POST /profile/avatar` as multipart with a single `avatar` field.
    pub async fn upload_avatar(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Profile, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| {
                ApiError::new(
                    Operation::UploadAvatar,
                    ApiErrorKind::InvalidRequest(e.to_string()),
                )
            })?;
        let form = Form::new().part(AVATAR_FIELD, part);
        let request = self.request(Method::POST, &["profile", "avatar"]).multipart(form);
        self.fetch_json(Operation::UploadAvatar, request).await
    }

    // =========================================================================
    // Posts & Comments
    // =========================================================================

    /// `GET /posts/me`
    pub async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        let request = self.request(Method::GET, &["posts", "me"]);
        self.fetch_json(Operation::LoadPosts, request).await
    }

    /// `GET /posts/:id/comments`
    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let request = self.request(Method::GET, &["posts", post_id, "comments"]);
        self.fetch_json(Operation::LoadComments, request).await
    }

    /// `POST /posts/:id/comments`
    pub async fn add_comment(&self, post_id: &str, body: &str) -> Result<Comment, ApiError> {
        let request = self
            .request(Method::POST, &["posts", post_id, "comments"])
            .json(&NewComment {
                body: body.to_string(),
            });
        self.fetch_json(Operation::AddComment, request).await
    }

    /// `DELETE /posts/:id/comments/:id`
    pub async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
        let request = self.request(
            Method::DELETE,
            &["posts", post_id, "comments", comment_id],
        );
        self.send(Operation::DeleteComment, request).await.map(|_| ())
    }

    /// `POST /posts/:id/like`. The server flips the like and answers with
    /// the resulting state.
    pub async fn toggle_like(&self, post_id: &str) -> Result<LikeResponse, ApiError> {
        let request = self.request(Method::POST, &["posts", post_id, "like"]);
        self.fetch_json(Operation::ToggleLike, request).await
    }

    /// `POST /posts/:id/save`
    pub async fn toggle_save(&self, post_id: &str) -> Result<SaveResponse, ApiError> {
        let request = self.request(Method::POST, &["posts", post_id, "save"]);
        self.fetch_json(Operation::ToggleSave, request).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so an id containing `/`, `?` or `#` stays a single segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base can carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.endpoint(segments))
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{:?} request failed: {}", operation, e);
            ApiError::new(operation, ApiErrorKind::Network(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{:?} answered with HTTP {}", operation, status.as_u16());
            return Err(ApiError::from_status(operation, status.as_u16()));
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(operation, request).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("{:?} response could not be decoded: {}", operation, e);
            ApiError::new(operation, ApiErrorKind::Decode(e.to_string()))
        })
    }
}
