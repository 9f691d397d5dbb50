// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// The API operation a failure belongs to.
///
/// Each operation carries the inline message shown next to the form or
/// button that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadSession,
    LoadProfile,
    SaveProfile,
    UploadAvatar,
    LoadPosts,
    LoadComments,
    AddComment,
    DeleteComment,
    ToggleLike,
    ToggleSave,
}

impl Operation {
    /// Returns the i18n message key for a failure of this operation.
    pub fn failure_key(self) -> &'static str {
        match self {
            Operation::LoadSession => "api-error-load-session",
            Operation::LoadProfile => "api-error-load-profile",
            Operation::SaveProfile => "api-error-save-failed",
            Operation::UploadAvatar => "api-error-upload-failed",
            Operation::LoadPosts => "api-error-load-posts",
            Operation::LoadComments => "api-error-load-comments",
            Operation::AddComment | Operation::DeleteComment => "api-error-comment-failed",
            Operation::ToggleLike | Operation::ToggleSave => "api-error-action-failed",
        }
    }

    /// English fallback text for the failure message.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::LoadSession => "Could not load session",
            Operation::LoadProfile => "Could not load profile",
            Operation::SaveProfile => "Save failed",
            Operation::UploadAvatar => "Upload failed",
            Operation::LoadPosts => "Could not load posts",
            Operation::LoadComments => "Could not load comments",
            Operation::AddComment | Operation::DeleteComment => "Comment failed",
            Operation::ToggleLike | Operation::ToggleSave => "Action failed",
        }
    }
}

/// What went wrong while talking to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Request could not be sent or the connection dropped.
    Network(String),

    /// The server answered 401.
    Unauthorized,

    /// The server answered with a non-success status.
    Status(u16),

    /// The response body was not the expected JSON.
    Decode(String),

    /// The request could not be built (bad URL, bad MIME type).
    InvalidRequest(String),
}

/// Failure of one API call, tagged with the operation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub operation: Operation,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(operation: Operation, kind: ApiErrorKind) -> Self {
        Self { operation, kind }
    }

    /// Returns the i18n key of the inline message for this failure.
    ///
    /// A 401 reads "Not signed in" regardless of the operation.
    pub fn i18n_key(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Unauthorized => "api-error-unauthorized",
            _ => self.operation.failure_key(),
        }
    }

    /// Returns the English inline message for this failure.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Unauthorized => "Not signed in",
            _ => self.operation.failure_message(),
        }
    }

    /// Maps an HTTP status code to an error kind.
    pub fn from_status(operation: Operation, status: u16) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::Status(status)
        };
        Self::new(operation, kind)
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network(msg) => write!(f, "network error: {}", msg),
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::Status(code) => write!(f, "HTTP status {}", code),
            ApiErrorKind::Decode(msg) => write!(f, "invalid response: {}", msg),
            ApiErrorKind::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.user_message(), self.kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn save_profile_failure_reads_save_failed() {
        let err = ApiError::new(Operation::SaveProfile, ApiErrorKind::Status(500));
        assert_eq!(err.user_message(), "Save failed");
        assert_eq!(err.i18n_key(), "api-error-save-failed");
    }

    #[test]
    fn upload_failure_reads_upload_failed() {
        let err = ApiError::new(
            Operation::UploadAvatar,
            ApiErrorKind::Network("reset".into()),
        );
        assert_eq!(err.user_message(), "Upload failed");
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        let err = ApiError::from_status(Operation::LoadProfile, 401);
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert_eq!(err.user_message(), "Not signed in");
        assert_eq!(err.i18n_key(), "api-error-unauthorized");
    }

    #[test]
    fn other_status_is_kept() {
        let err = ApiError::from_status(Operation::LoadPosts, 503);
        assert_eq!(err.kind, ApiErrorKind::Status(503));
        assert_eq!(err.user_message(), "Could not load posts");
    }

    #[test]
    fn api_error_display_includes_cause() {
        let err = ApiError::new(Operation::ToggleLike, ApiErrorKind::Status(502));
        let text = format!("{}", Error::from(err));
        assert!(text.starts_with("API Error: Action failed"));
        assert!(text.contains("502"));
    }
}
