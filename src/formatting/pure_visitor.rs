// src/formatting/pure_visitor.rs
//! Visitor that turns one block into one line of plain text.

use super::rich_text::rich_text_to_plain;
use crate::model::*;

/// Renders blocks as Markdown-like plain text.
///
/// Stateless: numbered list items always render as `1.` because no
/// position is tracked across siblings.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn prefixed(prefix: &str, content: &TextBlockContent) -> String {
        format!("{}{}", prefix, rich_text_to_plain(&content.rich_text))
    }
}

impl BlockVisitor for PlainTextRenderer {
    type Output = String;

    fn visit_paragraph(&mut self, content: &TextBlockContent) -> String {
        rich_text_to_plain(&content.rich_text)
    }

    fn visit_heading1(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("# ", content)
    }

    fn visit_heading2(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("## ", content)
    }

    fn visit_heading3(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("### ", content)
    }

    fn visit_bulleted_list_item(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("• ", content)
    }

    fn visit_numbered_list_item(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("1. ", content)
    }

    fn visit_quote(&mut self, content: &TextBlockContent) -> String {
        Self::prefixed("> ", content)
    }

    fn visit_code(&mut self, block: &CodeBlock) -> String {
        if let Some(language) = &block.language {
            log::debug!("Dropping code language '{}' from fence", language);
        }
        format!("```\n{}\n```", rich_text_to_plain(&block.content.rich_text))
    }

    fn visit_divider(&mut self) -> String {
        "---".to_string()
    }

    fn visit_unsupported(&mut self, block_type: &str, content: Option<&TextBlockContent>) -> String {
        match content {
            Some(content) => rich_text_to_plain(&content.rich_text),
            None => {
                log::debug!("Block type '{}' has no rich text, rendering empty line", block_type);
                String::new()
            }
        }
    }
}
