// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.

use crate::error::AppError;
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{ArticleMetadata, Block, UNTITLED};
use crate::types::{BlockId, PageId, RichTextItem};
use notion_client::objects::page::PageProperty;
use std::collections::HashMap;

/// Name of the multi-select property whose options become article tags.
const TAGS_PROPERTY: &str = "Tags";

/// Convert a notion-client Page to the metadata of an article
pub fn convert_page_metadata(
    notion_page: notion_client::objects::page::Page,
) -> Result<ArticleMetadata, AppError> {
    let id = PageId::parse(&notion_page.id).map_err(|e| {
        AppError::MalformedResponse(format!("Page ID '{}': {}", notion_page.id, e))
    })?;
    let title = extract_page_title(&notion_page.properties);
    let tags = extract_tags(&notion_page.properties);

    Ok(ArticleMetadata {
        id,
        title,
        tags,
        created: notion_page.created_time,
        last_edited: notion_page.last_edited_time,
        url: notion_page.url,
    })
}

/// Convert notion-client Block to our domain Block
pub fn convert_block(notion_block: notion_client::objects::block::Block) -> Result<Block, AppError> {
    let common = convert_block_common(&notion_block)?;

    use notion_client::objects::block::BlockType;

    match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Ok(Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(paragraph.rich_text),
        })),

        BlockType::Heading1 { heading_1 } => Ok(Block::Heading1(HeadingBlock {
            common,
            content: convert_text_block_content(heading_1.rich_text),
        })),

        BlockType::Heading2 { heading_2 } => Ok(Block::Heading2(HeadingBlock {
            common,
            content: convert_text_block_content(heading_2.rich_text),
        })),

        BlockType::Heading3 { heading_3 } => Ok(Block::Heading3(HeadingBlock {
            common,
            content: convert_text_block_content(heading_3.rich_text),
        })),

        BlockType::BulletedListItem { bulleted_list_item } => {
            Ok(Block::BulletedListItem(BulletedListItemBlock {
                common,
                content: convert_text_block_content(bulleted_list_item.rich_text),
            }))
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            Ok(Block::NumberedListItem(NumberedListItemBlock {
                common,
                content: convert_text_block_content(numbered_list_item.rich_text),
            }))
        }

        BlockType::ToDo { to_do } => Ok(Block::ToDo(ToDoBlock {
            common,
            content: convert_text_block_content(to_do.rich_text),
            checked: to_do.checked.unwrap_or(false),
        })),

        BlockType::Toggle { toggle } => Ok(Block::Toggle(ToggleBlock {
            common,
            content: convert_text_block_content(toggle.rich_text),
        })),

        BlockType::Quote { quote } => Ok(Block::Quote(QuoteBlock {
            common,
            content: convert_text_block_content(quote.rich_text),
        })),

        BlockType::Callout { callout } => Ok(Block::Callout(CalloutBlock {
            common,
            icon: callout.icon.and_then(convert_icon),
            content: convert_text_block_content(callout.rich_text),
        })),

        BlockType::Code { code } => Ok(Block::Code(CodeBlock {
            common,
            language: serde_name(&code.language).unwrap_or_default(),
            content: convert_text_block_content(code.rich_text),
            caption: convert_rich_text_array(code.caption),
        })),

        BlockType::Equation { equation } => Ok(Block::Equation(EquationBlock {
            common,
            expression: equation.expression,
        })),

        BlockType::Divider { .. } => Ok(Block::Divider(DividerBlock { common })),

        BlockType::Bookmark { bookmark } => Ok(Block::Bookmark(BookmarkBlock {
            common,
            url: bookmark.url,
            caption: convert_rich_text_array(bookmark.caption),
        })),

        BlockType::ChildPage { child_page } => Ok(Block::ChildPage(ChildPageBlock {
            common,
            title: child_page.title,
        })),

        other => {
            let block_type = serde_json::to_value(&other)
                .ok()
                .and_then(|value| value.get("type").and_then(|t| t.as_str().map(str::to_string)))
                .unwrap_or_else(|| "unsupported".to_string());
            log::debug!("Block {} has unsupported type {}", common.id, block_type);
            Ok(Block::Unsupported(UnsupportedBlock { common, block_type }))
        }
    }
}

/// Convert block common fields
fn convert_block_common(
    notion_block: &notion_client::objects::block::Block,
) -> Result<BlockCommon, AppError> {
    let raw_id = notion_block.id.as_deref().ok_or_else(|| {
        AppError::MalformedResponse("Block missing required ID field".to_string())
    })?;
    let id = BlockId::parse(raw_id)
        .map_err(|e| AppError::MalformedResponse(format!("Block ID '{}': {}", raw_id, e)))?;

    Ok(BlockCommon::from_upstream(
        id,
        notion_block.has_children.unwrap_or(false),
    ))
}

fn convert_text_block_content(
    rich_text: Vec<notion_client::objects::rich_text::RichText>,
) -> TextBlockContent {
    TextBlockContent::new(convert_rich_text_array(rich_text))
}

/// Convert array of rich text items
fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Vec<RichTextItem> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

/// Convert single rich text item
fn convert_rich_text(rich_text: notion_client::objects::rich_text::RichText) -> RichTextItem {
    use crate::types::{Link, RichTextType};
    use notion_client::objects::rich_text::RichText as NcRichText;

    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => {
            let plain_text = plain_text.unwrap_or_else(|| text.content.clone());
            RichTextItem {
                text_type: RichTextType::Text {
                    content: text.content,
                    link: text.link.map(|link| Link { url: link.url }),
                },
                annotations: annotations.map(convert_annotations).unwrap_or_default(),
                plain_text,
                href,
            }
        }

        NcRichText::Mention {
            mention,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            text_type: RichTextType::Mention {
                mention_type: mention_type_name(&mention),
            },
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            text_type: RichTextType::Equation {
                expression: equation.expression,
            },
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        #[allow(unreachable_patterns)]
        _ => RichTextItem::plain_text(""),
    }
}

fn mention_type_name(mention: &notion_client::objects::rich_text::Mention) -> String {
    use notion_client::objects::rich_text::Mention as NcMention;

    match mention {
        NcMention::User { .. } => "user".to_string(),
        NcMention::Page { .. } => "page".to_string(),
        NcMention::Database { .. } => "database".to_string(),
        NcMention::Date { .. } => "date".to_string(),
        NcMention::LinkPreview { .. } => "link_preview".to_string(),
        #[allow(unreachable_patterns)]
        other => serde_json::to_value(other)
            .ok()
            .and_then(|value| value.get("type").and_then(|t| t.as_str().map(str::to_string)))
            .unwrap_or_else(|| "other".to_string()),
    }
}

/// Convert annotations
fn convert_annotations(
    annotations: notion_client::objects::rich_text::Annotations,
) -> crate::types::Annotations {
    crate::types::Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
    }
}

/// Emoji icons are kept; file icons have no text form.
fn convert_icon(icon: notion_client::objects::block::Icon) -> Option<String> {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => Some(emoji),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// The serde name of a unit-like enum value, e.g. a code block language.
fn serde_name<T: serde::Serialize>(value: &T) -> Option<String> {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
}

/// Plain text of the page's title property, or `Untitled`.
fn extract_page_title(properties: &HashMap<String, PageProperty>) -> String {
    let title = properties.values().find_map(|property| match property {
        PageProperty::Title { title, .. } => Some(
            title
                .iter()
                .cloned()
                .map(convert_rich_text)
                .map(|rt| rt.plain_text)
                .collect::<String>(),
        ),
        _ => None,
    });

    match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => UNTITLED.to_string(),
    }
}

/// Option names of the `Tags` multi-select property, in their stored order.
fn extract_tags(properties: &HashMap<String, PageProperty>) -> Vec<String> {
    properties
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(TAGS_PROPERTY))
        .and_then(|(_, property)| match property {
            PageProperty::MultiSelect { multi_select, .. } => Some(
                multi_select
                    .iter()
                    .filter_map(|option| option.name.clone())
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}
