// src/formatting/block_renderer.rs
//! Block rendering: flattens a page's top-level blocks into one string.
//!
//! One line per block, in the order Notion returned them. Nested children
//! are not visited.

use super::pure_visitor::PlainTextRenderer;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::Block;

/// Renders a single block to its line of text.
pub fn render_block(block: &Block) -> String {
    block.accept(&mut PlainTextRenderer)
}

/// Renders blocks one per line, then trims the whole document.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);

    for block in blocks {
        if block.has_children() {
            log::debug!(
                "Block {} ({}) has nested children that are not fetched",
                block.id().map(|id| id.as_str()).unwrap_or("<no id>"),
                block.block_type()
            );
        }
        output.push_str(&render_block(block));
        output.push('\n');
    }

    log::debug!("Rendered {} blocks into {} bytes", blocks.len(), output.len());
    output.trim().to_string()
}
