//! End-to-end rendering of serialized editor documents.

use folio_renderer::{
    Document, DocumentNode, DocumentRenderer, Element, EmptyBlocks, Markup,
    create_feedback_block_id, feedback_blocks, table_of_contents,
};
use pretty_assertions::assert_eq;

const ARTICLE: &str = include_str!("fixtures/article.json");

fn article() -> Document {
    Document::from_json(ARTICLE).unwrap()
}

#[test]
fn test_render_article_html() {
    let html = DocumentRenderer::new().render_html(&article());
    let expected = concat!(
        "<h1>Logging in the browser</h1>",
        "<p>Use <code>console.<strong>log()</strong></code> to print <em>anything</em>.</p>",
        "<ul>",
        r#"<li>See the <a href="https://developer.mozilla.org" target="_blank" "#,
        r#"rel="noopener noreferrer">MDN docs</a></li>"#,
        "<li><s>Strip logs before release</s></li>",
        "</ul>",
        "<blockquote>Measure twice &amp; cut once.</blockquote>",
        "<hr>",
        r#"<pre><code class="language-javascript">console.log(1 &lt; 2);</code></pre>"#,
    );
    assert_eq!(html, expected);
}

#[test]
fn test_render_article_exactly_one_inline_code_wrapper() {
    let html = DocumentRenderer::new().render_html(&article());
    assert_eq!(html.matches("<code>").count(), 1);
}

#[test]
fn test_render_article_with_spacers() {
    let html = DocumentRenderer::new()
        .with_empty_blocks(EmptyBlocks::Spacer)
        .render_html(&article());
    assert!(html.contains("</p><p><br></p><ul>"));
}

#[test]
fn test_render_article_with_upload_override() {
    let renderer = DocumentRenderer::new().with_override(
        "upload",
        |node: &DocumentNode, _children: Option<Vec<Markup>>| {
            let DocumentNode::Unknown(upload) = node else {
                return None;
            };
            let id = upload.data["value"]["id"].as_str()?;
            Some(
                Element::new("img")
                    .with_attr("src", format!("/media/{id}"))
                    .into(),
            )
        },
    );
    let html = renderer.render_html(&article());
    assert!(html.contains(r#"</p><img src="/media/65f1"><ul>"#));
}

#[test]
fn test_feedback_blocks_for_article() {
    let blocks = feedback_blocks(&article());
    let bodies: Vec<_> = blocks.iter().map(|b| b.body.as_str()).collect();
    assert_eq!(
        bodies,
        vec![
            "Logging in the browser",
            "Use console.log() to print anything.",
            "See the MDN docs",
            "Strip logs before release",
            "Measure twice & cut once.",
            "console.log(1 < 2);",
        ]
    );
    for (index, block) in blocks.iter().enumerate() {
        assert_eq!(block.order, index as u64 + 1);
    }
    assert_eq!(
        blocks[1].id,
        create_feedback_block_id("Use console.log() to print anything.", 2.0)
    );
}

#[test]
fn test_table_of_contents_for_article() {
    let toc = table_of_contents(&article());
    assert_eq!(toc.len(), 1);
    assert_eq!(toc[0].level, 1);
    assert_eq!(toc[0].id, "logging-in-the-browser");
}

#[test]
fn test_render_is_repeatable() {
    let renderer = DocumentRenderer::new();
    let document = article();
    assert_eq!(renderer.render(&document), renderer.render(&document));
}

#[test]
fn test_unknown_and_malformed_nodes_do_not_abort() {
    let json = r#"{"root": {"type": "root", "children": [
        {"type": "paragraph", "children": [{"type": "text", "text": "first"}]},
        {"type": "mystery", "children": [{"type": "text", "text": "hidden"}]},
        {"type": "heading", "tag": "h42", "children": [{"type": "text", "text": "bad"}]},
        {"type": "paragraph", "children": [
            {"type": "text", "text": "second"},
            {"type": "text", "format": "bold"}
        ]}
    ]}}"#;
    let document = Document::from_json(json).unwrap();
    assert_eq!(
        DocumentRenderer::new().render_html(&document),
        "<p>first</p><p>second</p>"
    );
    let bodies: Vec<_> = feedback_blocks(&document)
        .into_iter()
        .map(|b| b.body)
        .collect();
    assert_eq!(bodies, vec!["first", "second"]);
}

#[test]
fn test_malformed_only_paragraph_leaves_no_trace() {
    let json = r#"{"root": {"type": "root", "children": [
        {"type": "paragraph", "children": [{"type": "text", "text": 42}]},
        {"type": "paragraph", "children": [{"type": "text", "text": "ok"}]}
    ]}}"#;
    let document = Document::from_json(json).unwrap();
    assert_eq!(DocumentRenderer::new().render_html(&document), "<p>ok</p>");

    let blocks = feedback_blocks(&document);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, create_feedback_block_id("ok", 1.0));
}

#[test]
fn test_payload_internal_link_renders_text_only() {
    let json = r#"{"root": {"type": "root", "children": [
        {"type": "paragraph", "children": [
            {"type": "link", "fields": {"linkType": "internal", "newTab": false},
             "children": [{"type": "text", "text": "internal"}]}
        ]}
    ]}}"#;
    let document = Document::from_json(json).unwrap();
    assert_eq!(
        DocumentRenderer::new().render_html(&document),
        "<p>internal</p>"
    );
}

#[test]
fn test_renderer_shared_across_threads() {
    let renderer = DocumentRenderer::new();
    let document = article();
    let expected = renderer.render_html(&document);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.render_html(&document)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
