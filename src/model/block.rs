use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// The Notion block types this service distinguishes.
///
/// Everything else lands in `Unsupported`, which still keeps the raw type
/// tag and any rich text found under it.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    Quote(QuoteBlock),
    Code(CodeBlock),
    Divider(DividerBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID, when the payload carried one
    pub fn id(&self) -> Option<&BlockId> {
        self.common().id.as_ref()
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Check if Notion reported nested children for this block
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get block type name as Notion spells it
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Quote(_) => "quote",
            Block::Code(_) => "code",
            Block::Divider(_) => "divider",
            Block::Unsupported(b) => b.block_type.as_str(),
        }
    }

    /// Accept a visitor
    pub fn accept<V: BlockVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Block::Paragraph(b) => visitor.visit_paragraph(&b.content),
            Block::Heading1(b) => visitor.visit_heading1(&b.content),
            Block::Heading2(b) => visitor.visit_heading2(&b.content),
            Block::Heading3(b) => visitor.visit_heading3(&b.content),
            Block::BulletedListItem(b) => visitor.visit_bulleted_list_item(&b.content),
            Block::NumberedListItem(b) => visitor.visit_numbered_list_item(&b.content),
            Block::Quote(b) => visitor.visit_quote(&b.content),
            Block::Code(b) => visitor.visit_code(b),
            Block::Divider(_) => visitor.visit_divider(),
            Block::Unsupported(b) => visitor.visit_unsupported(&b.block_type, b.content.as_ref()),
        }
    }
}

/// Visitor trait for traversing block structures.
pub trait BlockVisitor {
    type Output;

    fn visit_paragraph(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_heading1(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_heading2(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_heading3(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_bulleted_list_item(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_numbered_list_item(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_quote(&mut self, content: &TextBlockContent) -> Self::Output;
    fn visit_code(&mut self, block: &CodeBlock) -> Self::Output;
    fn visit_divider(&mut self) -> Self::Output;
    fn visit_unsupported(
        &mut self,
        block_type: &str,
        content: Option<&TextBlockContent>,
    ) -> Self::Output;
}
