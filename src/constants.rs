// src/constants.rs
//! Domain constants that define the operational boundaries of the service.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of what the service fetches, from where, and how it labels the result.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API version this service speaks.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many child blocks are requested in the single listing call.
///
/// The Notion API maximum is 100. Continuation cursors are not followed,
/// so pages longer than this are truncated.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Published document
// ---------------------------------------------------------------------------

/// The Notion page whose children are served.
pub const PUBLISHED_PAGE_ID: &str = "2498a22e66db80ffb4cacbca00c8de28";

/// Title attached to every successful response.
pub const DOCUMENT_TITLE: &str = "꿈과 무의식이 상징하는 다음 인연";

/// Value of the `source` field in every successful response.
pub const CONTENT_SOURCE: &str = "notion";

/// Value of the `error` field in every failure response.
pub const FETCH_FAILURE_MESSAGE: &str = "cannot fetch page";

// ---------------------------------------------------------------------------
// Service defaults
// ---------------------------------------------------------------------------

/// Address the service binds to when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Environment variable holding the Notion integration token.
pub const NOTION_TOKEN_ENV: &str = "NOTION_TOKEN";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 128;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
