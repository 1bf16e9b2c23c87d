// src/pipeline.rs
//! The fetch → render → envelope pipeline behind every content request.

use crate::api::NotionRepository;
use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::formatting::render_blocks;
use crate::model::Block;
use crate::output::ResultEnvelope;
use crate::types::PageId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Produces the published page as a `ResultEnvelope`.
///
/// Holds only immutable state; one instance serves every request.
#[derive(Clone)]
pub struct PageContentService {
    repository: Arc<dyn NotionRepository>,
    page_id: PageId,
    title: String,
}

impl PageContentService {
    pub fn new(repository: Arc<dyn NotionRepository>, page_id: PageId, title: impl Into<String>) -> Self {
        Self {
            repository,
            page_id,
            title: title.into(),
        }
    }

    /// Builds the service for a resolved configuration.
    pub fn from_config(repository: Arc<dyn NotionRepository>, config: &ServiceConfig) -> Self {
        Self::new(repository, config.page_id.clone(), config.title.clone())
    }

    /// Fetches the page's top-level blocks.
    pub async fn fetch(&self) -> Result<Vec<Block>, AppError> {
        let blocks = self.repository.retrieve_children(&self.page_id).await?;
        log::info!("Retrieved {} blocks from page {}", blocks.len(), self.page_id);
        Ok(blocks)
    }

    /// Wraps rendered blocks in the response envelope.
    pub fn compose(&self, blocks: &[Block], now: DateTime<Utc>) -> ResultEnvelope {
        ResultEnvelope::new(self.title.clone(), render_blocks(blocks), now)
    }

    /// Fetches and renders the page, stamped with the current time.
    pub async fn snapshot(&self) -> Result<ResultEnvelope, AppError> {
        let blocks = self.fetch().await?;
        Ok(self.compose(&blocks, Utc::now()))
    }
}
