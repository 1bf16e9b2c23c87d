// src/output/types.rs
//! JSON bodies returned to clients.

use crate::constants::{CONTENT_SOURCE, FETCH_FAILURE_MESSAGE};
use crate::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The successful response: the page flattened to text plus labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub title: String,
    pub content: String,
    /// Generation time, ISO-8601 UTC with milliseconds (`2024-05-01T12:00:00.000Z`).
    pub updated: String,
    pub source: String,
}

impl ResultEnvelope {
    pub fn new(title: impl Into<String>, content: impl Into<String>, updated: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            updated: updated.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: CONTENT_SOURCE.to_string(),
        }
    }
}

/// The failure response. Every failure kind shares this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
    pub details: String,
}

impl FailureBody {
    pub fn from_error(error: &AppError) -> Self {
        Self {
            error: FETCH_FAILURE_MESSAGE.to_string(),
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn updated_matches_javascript_iso_strings() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let envelope = ResultEnvelope::new("Title", "body", at);
        assert_eq!(envelope.updated, "2024-05-01T12:00:00.000Z");
        assert_eq!(envelope.source, "notion");
    }

    #[test]
    fn envelope_serializes_with_expected_keys() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_value(ResultEnvelope::new("T", "C", at)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "T",
                "content": "C",
                "updated": "2024-05-01T12:00:00.000Z",
                "source": "notion"
            })
        );
    }

    #[test]
    fn failure_body_carries_error_message() {
        let err = AppError::MalformedResponse("missing field `results`".to_string());
        let body = FailureBody::from_error(&err);
        assert_eq!(body.error, "cannot fetch page");
        assert_eq!(body.details, "Malformed response: missing field `results`");
    }
}
