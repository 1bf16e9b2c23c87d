// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the service.
//! Every request-time variant ends up in the same externally visible
//! failure body; the variants exist so logs can tell them apart.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Decoded from the `code` field of Notion's error body when one is present,
/// falling back to the bare HTTP status otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// Token is missing, invalid or expired
    Unauthorized,
    /// Token lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether the failure points at the integration token rather than the page.
    pub fn is_credential_problem(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::RestrictedResource | Self::HttpStatus(401)
        )
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Notion API error: {}", status.as_u16())]
    NotionService {
        status: reqwest::StatusCode,
        code: NotionErrorCode,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// The upstream status code, when the failure came from Notion itself.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::NotionService { status, .. } => Some(status.as_u16()),
            AppError::NetworkFailure(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_kept_in_the_message() {
        let err = AppError::NotionService {
            status: reqwest::StatusCode::NOT_FOUND,
            code: NotionErrorCode::ObjectNotFound,
            message: "Could not find block".to_string(),
        };
        assert_eq!(err.to_string(), "Notion API error: 404");
        assert_eq!(err.upstream_status(), Some(404));
    }

    #[test]
    fn error_codes_round_trip_through_display() {
        for code in [
            "rate_limited",
            "object_not_found",
            "unauthorized",
            "restricted_resource",
            "validation_error",
            "internal_server_error",
            "service_unavailable",
            "something_new",
        ] {
            assert_eq!(NotionErrorCode::from_api_response(code).to_string(), code);
        }
        assert_eq!(NotionErrorCode::from_http_status(502).to_string(), "http_502");
    }

    #[test]
    fn credential_problems_are_recognised() {
        assert!(NotionErrorCode::Unauthorized.is_credential_problem());
        assert!(NotionErrorCode::HttpStatus(401).is_credential_problem());
        assert!(!NotionErrorCode::ObjectNotFound.is_credential_problem());
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
