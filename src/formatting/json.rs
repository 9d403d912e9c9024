// src/formatting/json.rs
//! Structured JSON rendering of articles.

use crate::model::{Article, Block};
use crate::types::plain_text_of;
use serde_json::{json, Map, Value};

/// The article as a JSON document with one object per block.
pub fn render_json(article: &Article) -> Value {
    let meta = &article.metadata;
    json!({
        "id": meta.id,
        "title": meta.title,
        "created_time": meta.created,
        "last_edited_time": meta.last_edited,
        "tags": meta.tags,
        "url": meta.url,
        "content": article.content.iter().map(block_to_json).collect::<Vec<_>>(),
    })
}

fn block_to_json(block: &Block) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), json!(block.id()));
    object.insert("type".to_string(), json!(block.block_type()));
    object.insert("text".to_string(), json!(block.plain_text()));

    match block {
        Block::ToDo(todo) => {
            object.insert("checked".to_string(), json!(todo.checked));
        }
        Block::Code(code) => {
            object.insert("language".to_string(), json!(code.language));
            object.insert("caption".to_string(), json!(plain_text_of(&code.caption)));
        }
        Block::Callout(callout) => {
            object.insert("icon".to_string(), json!(callout.icon));
        }
        Block::Bookmark(bookmark) => {
            object.insert("url".to_string(), json!(bookmark.url));
        }
        Block::Equation(eq) => {
            object.insert("expression".to_string(), json!(eq.expression));
        }
        Block::ChildPage(page) => {
            object.insert("title".to_string(), json!(page.title));
        }
        _ => {}
    }

    if !block.children().is_empty() {
        object.insert(
            "children".to_string(),
            Value::Array(block.children().iter().map(block_to_json).collect()),
        );
    }

    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::types::{BlockId, PageId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_json_shape() {
        let mut toggle = Block::Toggle(ToggleBlock {
            common: BlockCommon::new(BlockId::parse("c02fc1d3db8b45c5a22227595b15aea7").unwrap()),
            content: TextBlockContent::plain("Details"),
        });
        toggle.set_children(vec![Block::ToDo(ToDoBlock {
            common: BlockCommon::new(BlockId::parse("1d1a0d3f8e9d4c6a9b3e2f1a0b9c8d7e").unwrap()),
            content: TextBlockContent::plain("Check"),
            checked: false,
        })]);

        let article = Article {
            metadata: ArticleMetadata {
                id: PageId::parse("598337872cf94fdf8782e53db20768a5").unwrap(),
                title: "Roadmap".to_string(),
                tags: vec!["planning".to_string()],
                created: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
                last_edited: Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap(),
                url: "https://www.notion.so/Roadmap-598337872cf94fdf8782e53db20768a5".to_string(),
            },
            content: vec![toggle],
        };

        let value = render_json(&article);
        assert_eq!(
            value,
            json!({
                "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
                "title": "Roadmap",
                "created_time": "2024-03-01T10:00:00Z",
                "last_edited_time": "2024-03-05T12:30:00Z",
                "tags": ["planning"],
                "url": "https://www.notion.so/Roadmap-598337872cf94fdf8782e53db20768a5",
                "content": [{
                    "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
                    "type": "toggle",
                    "text": "Details",
                    "children": [{
                        "id": "1d1a0d3f-8e9d-4c6a-9b3e-2f1a0b9c8d7e",
                        "type": "to_do",
                        "text": "Check",
                        "checked": false
                    }]
                }]
            })
        );
    }
}
