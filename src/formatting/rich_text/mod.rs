// src/formatting/rich_text/mod.rs
//! Formatting of rich text runs into markdown or plain text.

mod annotations;

pub use annotations::{code_span, style_markdown};

use crate::types::{Link, RichTextItem, RichTextType};

/// Formats an array of RichTextItems into Markdown.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(render_item_markdown).collect()
}

/// The same run with every annotation and link dropped.
pub fn rich_text_to_plain(items: &[RichTextItem]) -> String {
    crate::types::plain_text_of(items)
}

fn render_item_markdown(item: &RichTextItem) -> String {
    match &item.text_type {
        // Equations ignore styling
        RichTextType::Equation { expression } => format!("${}$", expression),

        RichTextType::Mention { .. } => {
            style_markdown(&item.plain_text, &item.annotations, item.href.as_deref())
        }

        RichTextType::Text { content, link } => {
            let url = link
                .as_ref()
                .map(|Link { url }| url.as_str())
                .or(item.href.as_deref());
            style_markdown(content, &item.annotations, url)
        }
    }
}
