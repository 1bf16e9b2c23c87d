// src/api/parser.rs
//! Turns raw Notion API responses into domain blocks.
//!
//! Block payloads are read from `serde_json::Value` rather than derived
//! structs so that unknown types and odd rich-text shapes degrade to empty
//! text instead of failing the whole response.

use super::client::ApiResponse;
use super::types::{NotionApiErrorResponse, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::*;
use crate::types::{rich_text_from_json, BlockId};
use serde_json::Value;

/// Parse any Notion API response, mapping non-success statuses to errors
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!(
                "Failed to parse response from {}: {} (body: {})",
                result.url,
                e,
                preview(&result.data)
            );
            AppError::from(e)
        })
    } else {
        Err(parse_error_response(&result))
    }
}

/// Classifies a non-success response, using Notion's error body when it has one
fn parse_error_response(result: &ApiResponse<String>) -> AppError {
    let (code, message) = match serde_json::from_str::<NotionApiErrorResponse>(&result.data) {
        Ok(body) => {
            if let Some(request_id) = &body.request_id {
                log::debug!("Notion request id for failed call: {}", request_id);
            }
            (NotionErrorCode::from_api_response(&body.code), body.message)
        }
        Err(_) => (
            NotionErrorCode::from_http_status(result.status.as_u16()),
            format!("HTTP {} from {}", result.status, result.url),
        ),
    };

    log::error!(
        "Notion API returned {} ({}): {}",
        result.status,
        code,
        preview(&message)
    );

    AppError::NotionService {
        status: result.status,
        code,
        message,
    }
}

/// Parses a block-children listing into domain blocks, keeping cursor data
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: PaginatedResponse<Value> = parse_api_response(result)?;
    let blocks = response
        .results
        .iter()
        .map(convert_block)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaginatedResponse {
        object: response.object,
        results: blocks,
        next_cursor: response.next_cursor,
        has_more: response.has_more,
    })
}

/// Converts one raw block object into the domain model.
///
/// A missing `type` tag yields an `Unsupported` block with an empty type.
/// Text-bearing types whose payload is absent or `null` are malformed.
pub fn convert_block(value: &Value) -> Result<Block, AppError> {
    let object = value.as_object().ok_or_else(|| {
        AppError::MalformedResponse(format!("Block is not a JSON object: {}", preview(&value.to_string())))
    })?;

    let common = BlockCommon {
        id: object.get("id").and_then(Value::as_str).map(|id| {
            BlockId::parse(id).unwrap_or_else(|_| BlockId::from_normalized(id.to_string()))
        }),
        has_children: object
            .get("has_children")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    };

    let block_type = object.get("type").and_then(Value::as_str).unwrap_or_default();
    let payload = object.get(block_type).filter(|p| !p.is_null());

    let block = match block_type {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            common,
            content: text_content(block_type, payload)?,
        }),
        "heading_1" => Block::Heading1(Heading1Block {
            common,
            content: text_content(block_type, payload)?,
        }),
        "heading_2" => Block::Heading2(Heading2Block {
            common,
            content: text_content(block_type, payload)?,
        }),
        "heading_3" => Block::Heading3(Heading3Block {
            common,
            content: text_content(block_type, payload)?,
        }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            common,
            content: text_content(block_type, payload)?,
        }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
            common,
            content: text_content(block_type, payload)?,
        }),
        "quote" => Block::Quote(QuoteBlock {
            common,
            content: text_content(block_type, payload)?,
        }),
        "code" => Block::Code(CodeBlock {
            common,
            language: payload
                .and_then(|p| p.get("language"))
                .and_then(Value::as_str)
                .map(str::to_string),
            content: text_content(block_type, payload)?,
        }),
        "divider" => Block::Divider(DividerBlock { common }),
        other => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: other.to_string(),
            content: payload
                .and_then(|p| p.get("rich_text"))
                .filter(|rich_text| !rich_text.is_null())
                .map(|rich_text| TextBlockContent {
                    rich_text: rich_text_from_json(Some(rich_text)),
                }),
        }),
    };

    Ok(block)
}

/// Reads the rich text of a known text-bearing block.
fn text_content(block_type: &str, payload: Option<&Value>) -> Result<TextBlockContent, AppError> {
    let payload = payload.ok_or_else(|| {
        AppError::MalformedResponse(format!(
            "'{}' block is missing its '{}' payload",
            block_type, block_type
        ))
    })?;

    Ok(TextBlockContent {
        rich_text: rich_text_from_json(payload.get("rich_text")),
    })
}

/// Shortens a body for log output without splitting a character.
fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}
