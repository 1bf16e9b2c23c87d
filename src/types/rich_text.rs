use serde_json::Value;

/// One span of a Notion rich-text array.
///
/// Only the plain `text.content` is kept; annotations, links and mentions
/// are dropped at parse time. A span without a `text` object (mentions,
/// equations) carries `None` and contributes nothing when flattened.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichTextItem {
    pub text: Option<TextContent>,
}

/// The `text` object of a rich-text span.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextContent {
    pub content: String,
}

impl RichTextItem {
    /// Create a plain text span.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text: Some(TextContent {
                content: text.to_string(),
            }),
        }
    }

    /// A span with no `text` object, such as a mention.
    pub fn without_text() -> Self {
        Self { text: None }
    }

    /// The span's plain content, or `""` when it has no text.
    pub fn content(&self) -> &str {
        self.text.as_ref().map(|t| t.content.as_str()).unwrap_or("")
    }

    /// Reads one span out of raw JSON without ever failing.
    ///
    /// A non-object span, or a `text.content` that is not a string, yields
    /// empty content.
    pub fn from_json(value: &Value) -> Self {
        match value.get("text") {
            Some(text) if !text.is_null() => Self {
                text: Some(TextContent {
                    content: text
                        .get("content")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                }),
            },
            _ => Self::without_text(),
        }
    }
}

/// Reads a rich-text array out of raw JSON.
///
/// Absent, `null`, or non-array input yields an empty list.
pub fn rich_text_from_json(value: Option<&Value>) -> Vec<RichTextItem> {
    value
        .and_then(Value::as_array)
        .map(|spans| spans.iter().map(RichTextItem::from_json).collect())
        .unwrap_or_default()
}
