// src/formatting/rich_text/annotations.rs
//! Markdown delimiters for Notion annotations.

use crate::types::Annotations;

/// Delimiter pairs applied around a code span, innermost first.
fn active_markers(annotations: &Annotations) -> Vec<(&'static str, &'static str)> {
    [
        (annotations.strikethrough, ("~~", "~~")),
        (annotations.bold, ("**", "**")),
        (annotations.italic, ("*", "*")),
        (annotations.underline, ("<u>", "</u>")),
    ]
    .into_iter()
    .filter_map(|(on, pair)| on.then_some(pair))
    .collect()
}

/// Wraps `code` in a backtick fence longer than any backtick run inside it.
pub fn code_span(code: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if code.starts_with('`') || code.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{code}{pad}{fence}")
}

/// Wraps `content` in the markers for `annotations`, then in a link.
///
/// Surrounding whitespace stays outside the markers: `** bold**` is not emphasis.
pub fn style_markdown(content: &str, annotations: &Annotations, link: Option<&str>) -> String {
    let core = content.trim();
    let markers = active_markers(annotations);
    if core.is_empty() || (markers.is_empty() && !annotations.code && link.is_none()) {
        return content.to_string();
    }

    let leading = &content[..content.len() - content.trim_start().len()];
    let trailing = &content[content.trim_end().len()..];

    let mut styled = String::with_capacity(content.len() + 16);
    styled.push_str(leading);
    if link.is_some() {
        styled.push('[');
    }
    for (open, _) in markers.iter().rev() {
        styled.push_str(open);
    }
    if annotations.code {
        styled.push_str(&code_span(core));
    } else {
        styled.push_str(core);
    }
    for (_, close) in &markers {
        styled.push_str(close);
    }
    if let Some(url) = link {
        styled.push_str("](");
        styled.push_str(url);
        styled.push(')');
    }
    styled.push_str(trailing);
    styled
}
