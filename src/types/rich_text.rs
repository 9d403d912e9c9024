use serde::{Deserialize, Serialize};

/// The kind of rich text content.
///
/// Each variant carries its specific data; `plain_text` on the enclosing
/// item is the fallback rendering for any variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Mention { mention_type: String },
    Equation { expression: String },
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item: the most common rich text variant.
    ///
    /// ```ignore
    /// RichTextItem::plain_text("hello")
    /// ```
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Same text, with the given annotations applied.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Same text, linked to `url`.
    pub fn with_link(mut self, url: &str) -> Self {
        if let RichTextType::Text { link, .. } = &mut self.text_type {
            *link = Some(Link {
                url: url.to_string(),
            });
        }
        self.href = Some(url.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// Concatenates the plain text of a rich text run.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}
