// tests/common/mod.rs
//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use notion_mcp::model::*;
use notion_mcp::{AppError, ContentSource, PageId, RichTextItem, SearchQuery, SearchResult};
use std::sync::Mutex;

pub const ARTICLE_ID: &str = "59833787-2cf9-4fdf-8782-e53db20768a5";

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, n, 9, 0, 0).unwrap()
}

pub fn search_result(hex_suffix: u32, title: &str, edited_day: u32) -> SearchResult {
    SearchResult {
        id: PageId::parse(&format!("{:032x}", hex_suffix)).unwrap(),
        title: title.to_string(),
        tags: vec!["docs".to_string()],
        created: day(1),
        last_edited: day(edited_day),
        url: format!("https://www.notion.so/{:032x}", hex_suffix),
    }
}

fn common() -> BlockCommon {
    BlockCommon::default()
}

fn styled(text: &str, annotations: notion_mcp::Annotations) -> RichTextItem {
    RichTextItem::plain_text(text).with_annotations(annotations)
}

/// An article exercising every block kind the renderers know.
pub fn sample_article() -> Article {
    let bold = notion_mcp::Annotations {
        bold: true,
        ..Default::default()
    };
    let italic = notion_mcp::Annotations {
        italic: true,
        ..Default::default()
    };
    let code = notion_mcp::Annotations {
        code: true,
        ..Default::default()
    };

    let mut parent_bullet = Block::BulletedListItem(BulletedListItemBlock {
        common: common(),
        content: TextBlockContent::plain("Milestones"),
    });
    parent_bullet.set_children(vec![
        Block::NumberedListItem(NumberedListItemBlock {
            common: common(),
            content: TextBlockContent::plain("Alpha"),
        }),
        Block::NumberedListItem(NumberedListItemBlock {
            common: common(),
            content: TextBlockContent::plain("Beta"),
        }),
    ]);

    let mut toggle = Block::Toggle(ToggleBlock {
        common: common(),
        content: TextBlockContent::plain("Open questions"),
    });
    toggle.set_children(vec![Block::Paragraph(ParagraphBlock {
        common: common(),
        content: TextBlockContent::plain("Pricing is undecided."),
    })]);

    Article {
        metadata: ArticleMetadata {
            id: PageId::parse(ARTICLE_ID).unwrap(),
            title: "Product Roadmap".to_string(),
            tags: vec!["planning".to_string(), "q3".to_string()],
            created: day(1),
            last_edited: day(5),
            url: "https://www.notion.so/Product-Roadmap-598337872cf94fdf8782e53db20768a5"
                .to_string(),
        },
        content: vec![
            Block::Heading1(HeadingBlock {
                common: common(),
                content: TextBlockContent::plain("Overview"),
            }),
            Block::Paragraph(ParagraphBlock {
                common: common(),
                content: TextBlockContent::new(vec![
                    RichTextItem::plain_text("We ship "),
                    styled("three", bold),
                    RichTextItem::plain_text(" releases, see "),
                    RichTextItem::plain_text("the plan").with_link("https://example.com/plan"),
                    RichTextItem::plain_text(" and "),
                    styled("config.toml", code),
                    RichTextItem::plain_text("."),
                ]),
            }),
            parent_bullet,
            Block::BulletedListItem(BulletedListItemBlock {
                common: common(),
                content: TextBlockContent::new(vec![styled("Launch", italic)]),
            }),
            Block::Heading2(HeadingBlock {
                common: common(),
                content: TextBlockContent::plain("Tasks"),
            }),
            Block::ToDo(ToDoBlock {
                common: common(),
                content: TextBlockContent::plain("Write spec"),
                checked: true,
            }),
            Block::ToDo(ToDoBlock {
                common: common(),
                content: TextBlockContent::plain("Review budget"),
                checked: false,
            }),
            Block::Quote(QuoteBlock {
                common: common(),
                content: TextBlockContent::plain("Ship early, ship often."),
            }),
            Block::Callout(CalloutBlock {
                common: common(),
                content: TextBlockContent::plain("Dates may move."),
                icon: Some("⚠️".to_string()),
            }),
            Block::Code(CodeBlock {
                common: common(),
                content: TextBlockContent::plain("cargo build --release"),
                language: "shell".to_string(),
                caption: vec![RichTextItem::plain_text("Release build")],
            }),
            Block::Equation(EquationBlock {
                common: common(),
                expression: "r = p \\cdot q".to_string(),
            }),
            Block::Divider(DividerBlock { common: common() }),
            Block::Bookmark(BookmarkBlock {
                common: common(),
                url: "https://example.com/board".to_string(),
                caption: vec![RichTextItem::plain_text("Project board")],
            }),
            toggle,
            Block::Heading3(HeadingBlock {
                common: common(),
                content: TextBlockContent::plain("Steps"),
            }),
            Block::NumberedListItem(NumberedListItemBlock {
                common: common(),
                content: TextBlockContent::plain("Plan"),
            }),
            Block::NumberedListItem(NumberedListItemBlock {
                common: common(),
                content: TextBlockContent::plain("Build"),
            }),
            Block::ChildPage(ChildPageBlock {
                common: common(),
                title: "Retrospective".to_string(),
            }),
            Block::Unsupported(UnsupportedBlock {
                common: common(),
                block_type: "table".to_string(),
            }),
        ],
    }
}

/// In-memory content source recording what it was asked.
pub struct FakeSource {
    pub results: Vec<SearchResult>,
    pub article: Option<Article>,
    pub queries: Mutex<Vec<SearchQuery>>,
    pub article_requests: Mutex<Vec<PageId>>,
}

impl FakeSource {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            article: None,
            queries: Mutex::new(Vec::new()),
            article_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_article(article: Article) -> Self {
        Self {
            article: Some(article),
            ..Self::with_results(Vec::new())
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn article_request_count(&self) -> usize {
        self.article_requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ContentSource for FakeSource {
    async fn search_pages(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.results.clone())
    }

    async fn retrieve_article(&self, id: &PageId) -> Result<Article, AppError> {
        self.article_requests.lock().unwrap().push(*id);
        match &self.article {
            Some(article) if &article.metadata.id == id => Ok(article.clone()),
            _ => Err(AppError::NotFound(format!("no article with id '{}'", id))),
        }
    }
}
