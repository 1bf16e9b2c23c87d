// src/config.rs
use crate::constants::{
    DEFAULT_BIND_ADDR, DOCUMENT_TITLE, NOTION_API_BASE_URL, NOTION_TOKEN_ENV, PUBLISHED_PAGE_ID,
};
use crate::error::AppError;
use crate::types::{ApiKey, PageId, ValidatedUrl, ValidationError};
use clap::Parser;
use std::net::SocketAddr;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Address to listen on
    #[arg(short, long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Notion page URL or ID to serve (defaults to the published page)
    #[arg(long, default_value = PUBLISHED_PAGE_ID)]
    pub page_id: String,

    /// Base URL of the Notion API
    #[arg(long, default_value = NOTION_API_BASE_URL)]
    pub api_base_url: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved service configuration: validated once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub page_id: PageId,
    pub api_key: ApiKey,
    pub api_base_url: ValidatedUrl,
    pub bind_addr: SocketAddr,
    pub title: String,
}

impl ServiceConfig {
    /// Resolves the configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(NOTION_TOKEN_ENV).ok();
        Self::resolve_with_token(cli, token)
    }

    /// Resolves the configuration with an explicitly supplied token.
    ///
    /// A missing token is not an error: requests will be rejected upstream
    /// and surface through the regular failure response.
    pub fn resolve_with_token(
        cli: CommandLineInput,
        token: Option<String>,
    ) -> Result<Self, AppError> {
        let api_key = match token {
            Some(token) => ApiKey::new(token),
            None => ApiKey::empty(),
        };
        if api_key.is_empty() {
            log::warn!(
                "{} is not set; every request will fail with an upstream 401",
                NOTION_TOKEN_ENV
            );
        } else if !api_key.has_known_prefix() {
            log::warn!("Notion token {} has an unexpected prefix", api_key);
        }

        let page_id = PageId::parse(&cli.page_id)?;
        let api_base_url = ValidatedUrl::parse(&cli.api_base_url)?;
        let bind_addr = cli.bind.parse::<SocketAddr>().map_err(|e| {
            ValidationError::InvalidBindAddress {
                addr: cli.bind.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(ServiceConfig {
            page_id,
            api_key,
            api_base_url,
            bind_addr,
            title: DOCUMENT_TITLE.to_string(),
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            page_id: PageId::from_normalized(PUBLISHED_PAGE_ID.to_string()),
            api_key: ApiKey::empty(),
            api_base_url: ValidatedUrl::parse(NOTION_API_BASE_URL)
                .expect("Default Notion base URL should be valid"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            title: DOCUMENT_TITLE.to_string(),
        }
    }
}
