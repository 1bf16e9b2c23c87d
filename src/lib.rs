// src/lib.rs
//! notion-content library: serves one Notion page as plain text over HTTP.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ServiceConfig`
//! - **Domain model**: `Block` and its payload records
//! - **Domain types**: `PageId`, `BlockId`, `ApiKey`, `RichTextItem`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers
//! - **Formatting**: `render_block`, `render_blocks`, `extract_rich_text`
//! - **Serving**: `PageContentService`, `content_router`, `serve`

pub mod api;
mod config;
pub mod constants;
mod error;
pub mod formatting;
pub mod model;
mod output;
mod pipeline;
mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ServiceConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BlockVisitor, BulletedListItemBlock, CodeBlock, DividerBlock,
    Heading1Block, Heading2Block, Heading3Block, NumberedListItemBlock, ParagraphBlock,
    QuoteBlock, TextBlockContent, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, BlockId, PageId, RichTextItem, TextContent, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    parser::{convert_block, parse_blocks_pagination},
    ApiResponse, NotionHttpClient, NotionRepository,
};

// --- Formatting ---
pub use crate::formatting::{extract_rich_text, render_block, render_blocks, PlainTextRenderer};

// --- Serving ---
pub use crate::output::{FailureBody, ResultEnvelope};
pub use crate::pipeline::PageContentService;
pub use crate::server::{build_app, content_router, serve, AppState};
