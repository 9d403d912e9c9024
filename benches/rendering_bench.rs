// benches/rendering_bench.rs
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion_mcp::model::*;
use notion_mcp::{render_article, Annotations, OutputFormat, PageId, RichTextItem};

fn paragraph(i: usize) -> Block {
    Block::Paragraph(ParagraphBlock {
        common: BlockCommon::default(),
        content: TextBlockContent::new(vec![
            RichTextItem::plain_text(&format!("Paragraph {} mentions ", i)),
            RichTextItem::plain_text("something important").with_annotations(Annotations {
                bold: true,
                ..Default::default()
            }),
            RichTextItem::plain_text(" and links ").with_link("https://example.com"),
        ]),
    })
}

fn list_with_children(i: usize) -> Block {
    let mut item = Block::BulletedListItem(BulletedListItemBlock {
        common: BlockCommon::default(),
        content: TextBlockContent::plain(&format!("Item {}", i)),
    });
    item.set_children(
        (0..3)
            .map(|j| {
                Block::NumberedListItem(NumberedListItemBlock {
                    common: BlockCommon::default(),
                    content: TextBlockContent::plain(&format!("Step {}.{}", i, j)),
                })
            })
            .collect(),
    );
    item
}

fn build_article(sections: usize) -> Article {
    let mut content = Vec::with_capacity(sections * 4);
    for i in 0..sections {
        content.push(Block::Heading2(HeadingBlock {
            common: BlockCommon::default(),
            content: TextBlockContent::plain(&format!("Section {}", i)),
        }));
        content.push(paragraph(i));
        content.push(list_with_children(i));
        content.push(Block::Code(CodeBlock {
            common: BlockCommon::default(),
            content: TextBlockContent::plain("fn main() {\n    println!(\"hi\");\n}"),
            language: "rust".to_string(),
            caption: vec![],
        }));
    }

    Article {
        metadata: ArticleMetadata {
            id: PageId::new_v4(),
            title: "Benchmark".to_string(),
            tags: vec!["bench".to_string()],
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            last_edited: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            url: "https://www.notion.so/benchmark".to_string(),
        },
        content,
    }
}

fn bench_render_article(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_article");

    for sections in [10, 100, 500] {
        let article = build_article(sections);
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text] {
            group.bench_with_input(
                BenchmarkId::new(format.to_string(), sections),
                &article,
                |b, article| {
                    b.iter(|| render_article(black_box(article), format).unwrap());
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_article);
criterion_main!(benches);
