// src/api/mod.rs
//! Notion API interaction: the ability to read a page's blocks.
//!
//! Business logic depends on the `NotionRepository` trait, never on HTTP
//! details, so the request handler can run against an in-memory source.

pub mod client;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::model::Block;
use crate::types::PageId;

/// The ability to retrieve content from a Notion workspace.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Lists the top-level child blocks of a page, in Notion's order.
    ///
    /// Only the first page of results is returned.
    async fn retrieve_children(&self, parent: &PageId) -> Result<Vec<Block>, AppError>;
}

pub use client::{ApiResponse, NotionHttpClient};
