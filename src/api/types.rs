// src/api/types.rs
//! Wire types for the Notion API responses this service reads.

use serde::Deserialize;

/// Generic paginated response from Notion API.
///
/// Only `results` is required; a body without it is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error response from Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
