// tests/article_rendering.rs
//! Rendering a full article through every output format.

mod common;

use common::{sample_article, FakeSource, ARTICLE_ID};
use notion_mcp::{
    render_article, retrieve_article, ArticleRequest, ErrorKind, OutputFormat, RenderedOutput,
};
use pretty_assertions::assert_eq;

fn render(format: OutputFormat) -> String {
    render_article(&sample_article(), format)
        .unwrap()
        .into_string()
        .unwrap()
}

#[test]
fn test_markdown_snapshot() {
    let output = render(OutputFormat::Markdown);
    insta::assert_snapshot!(output);
}

#[test]
fn test_same_content_in_every_format() {
    let json = render(OutputFormat::Json);
    let markdown = render(OutputFormat::Markdown);
    let text = render(OutputFormat::Text);

    for fragment in [
        "Product Roadmap",
        "planning",
        "Overview",
        "three",
        "Milestones",
        "Beta",
        "Write spec",
        "Ship early, ship often.",
        "cargo build --release",
        "Release build",
        "Pricing is undecided.",
        "Retrospective",
    ] {
        assert!(json.contains(fragment), "json is missing {:?}", fragment);
        assert!(markdown.contains(fragment), "markdown is missing {:?}", fragment);
        assert!(text.contains(fragment), "text is missing {:?}", fragment);
    }
}

#[test]
fn test_text_has_no_markup() {
    let text = render(OutputFormat::Text);

    for marker in ["**", "`", "](", "# ", "> ", "- [", "~~", "<u>", "$$"] {
        assert!(!text.contains(marker), "text contains {:?}:\n{}", marker, text);
    }
    assert!(text.contains("We ship three releases, see the plan and config.toml."));
    assert!(text.contains("☑ Write spec"));
    assert!(text.contains("☐ Review budget"));
    assert!(text.contains("  1) Alpha"));
    assert!(text.contains("Project board (https://example.com/board)"));
    assert!(text.ends_with("Retrospective\n"));
}

#[test]
fn test_json_structure() {
    let value = match render_article(&sample_article(), OutputFormat::Json).unwrap() {
        RenderedOutput::Json(value) => value,
        other => panic!("expected json, got {:?}", other.format()),
    };

    assert_eq!(value["id"], ARTICLE_ID);
    assert_eq!(value["title"], "Product Roadmap");
    assert_eq!(value["tags"], serde_json::json!(["planning", "q3"]));
    assert_eq!(value["created_time"], "2024-03-01T09:00:00Z");

    let content = value["content"].as_array().unwrap();
    assert_eq!(content.len(), 19);
    assert_eq!(content[0]["type"], "heading_1");
    assert_eq!(content[2]["children"][1]["text"], "Beta");
    assert_eq!(content[5]["checked"], true);
    assert_eq!(content[9]["language"], "shell");
    assert_eq!(content[9]["caption"], "Release build");
    assert_eq!(content[18]["type"], "table");
}

#[test]
fn test_rendering_is_deterministic() {
    for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text] {
        assert_eq!(render(format), render(format));
    }
}

#[tokio::test]
async fn test_retrieve_through_source() {
    let source = FakeSource::with_article(sample_article());
    let request = ArticleRequest::new(ARTICLE_ID, Some("md")).unwrap();

    let output = retrieve_article(&source, &request).await.unwrap();

    assert_eq!(output.format(), OutputFormat::Markdown);
    assert!(output.into_string().unwrap().starts_with("# Product Roadmap\n\n"));
    assert_eq!(source.article_request_count(), 1);
}

#[tokio::test]
async fn test_unknown_article_is_not_found() {
    let source = FakeSource::with_article(sample_article());
    let request = ArticleRequest::new("00000000000000000000000000000000", None).unwrap();

    let err = retrieve_article(&source, &request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_request_validation_happens_before_any_fetch() {
    let err = ArticleRequest::new(ARTICLE_ID, Some("pdf")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = ArticleRequest::new("nonexistent-id-12345", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
