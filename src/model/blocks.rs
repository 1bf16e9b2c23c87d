use super::common::BlockCommon;
use crate::types::RichTextItem;

/// Text content shared by every text-bearing block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    /// Content made of a single plain span.
    pub fn plain(text: &str) -> Self {
        Self {
            rich_text: vec![RichTextItem::plain_text(text)],
        }
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 1 block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Heading1Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 2 block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Heading2Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 3 block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Heading3Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Quote block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub common: BlockCommon,
    /// Logged at debug level; the fence is always emitted without a language tag.
    pub language: Option<String>,
    pub content: TextBlockContent,
}

/// Divider block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

/// Any block type without a dedicated variant.
///
/// `content` is present when the type-keyed payload carries a `rich_text`
/// field (callouts, toggles, to-dos and the like).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
    pub content: Option<TextBlockContent>,
}
