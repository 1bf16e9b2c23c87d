// src/formatting/mod.rs
//! Renders Notion blocks into the plain-text document served to clients.

pub mod block_renderer;
mod pure_visitor;
pub mod rich_text;

pub use self::block_renderer::{render_block, render_blocks};
pub use self::pure_visitor::PlainTextRenderer;
pub use self::rich_text::{extract_rich_text, rich_text_to_plain};
