// src/formatting/rich_text/mod.rs
//! Flattens Notion rich-text arrays into plain strings.
//!
//! Styling, links and mentions are discarded: only `text.content` survives,
//! concatenated in array order with no separator.

use crate::types::{rich_text_from_json, RichTextItem};
use serde_json::Value;

/// Concatenates the plain content of typed spans.
pub fn rich_text_to_plain(items: &[RichTextItem]) -> String {
    items.iter().map(RichTextItem::content).collect()
}

/// Extracts plain text from a raw rich-text JSON value.
///
/// Never fails: absent, `null` or non-array input yields `""`.
pub fn extract_rich_text(value: Option<&Value>) -> String {
    rich_text_to_plain(&rich_text_from_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_or_mistyped_input_is_empty() {
        assert_eq!(extract_rich_text(None), "");
        assert_eq!(extract_rich_text(Some(&Value::Null)), "");
        assert_eq!(extract_rich_text(Some(&json!("not-an-array"))), "");
        assert_eq!(extract_rich_text(Some(&json!(17))), "");
    }

    #[test]
    fn spans_concatenate_without_separator() {
        let spans = json!([{"text": {"content": "a"}}, {"text": {"content": "b"}}]);
        assert_eq!(extract_rich_text(Some(&spans)), "ab");
    }

    #[test]
    fn spans_without_text_contribute_nothing() {
        let spans = json!([
            {"type": "text", "text": {"content": "see "}},
            {"type": "mention", "mention": {"type": "user"}, "plain_text": "@Ann"},
            {"type": "equation", "equation": {"expression": "x^2"}},
            {"type": "text", "text": {"content": "later"}}
        ]);
        assert_eq!(extract_rich_text(Some(&spans)), "see later");
    }

    #[test]
    fn typed_spans_flatten_in_order() {
        let items = vec![
            RichTextItem::plain_text("one "),
            RichTextItem::without_text(),
            RichTextItem::plain_text("two"),
        ];
        assert_eq!(rich_text_to_plain(&items), "one two");
        assert_eq!(rich_text_to_plain(&[]), "");
    }
}
