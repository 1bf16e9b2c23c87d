// src/api/client.rs
//! Thin HTTP client wrapper for the Notion API.
//!
//! Handles authentication headers and the single block-children request;
//! parsing lives in `parser`.

use crate::constants::{NOTION_API_PAGE_SIZE, NOTION_API_VERSION};
use crate::error::AppError;
use crate::model::Block;
use crate::types::{ApiKey, PageId, ValidatedUrl};
use reqwest::{header, Client, Response};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey, base_url: &ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.as_base().to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint (path relative to the base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        log::debug!("GET {} -> {}", endpoint, response.status());

        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_children(&self, parent: &PageId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!(
            "blocks/{}/children?page_size={}",
            parent.as_str(),
            NOTION_API_PAGE_SIZE
        );
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        let page = super::parser::parse_blocks_pagination(result)?;

        if page.has_more {
            log::warn!(
                "Page {} has more than {} child blocks; only the first {} are served",
                parent,
                NOTION_API_PAGE_SIZE,
                page.results.len()
            );
        }

        Ok(page.results)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
