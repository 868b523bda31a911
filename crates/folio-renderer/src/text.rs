//! Plain text extraction and feedback block discovery.
//!
//! These traversals run over the same input tree as the renderer but are
//! independent of it: feedback tooling calls them to find anchorable blocks.

use folio_sections::FeedbackBlock;

use crate::empty::is_node_empty;
use crate::node::{Document, DocumentNode};

/// Reading-order text of `node`.
///
/// Line breaks become `\n`, tabs `\t`, and sibling blocks are separated by a
/// newline.
#[must_use]
pub fn plain_text(node: &DocumentNode) -> String {
    let mut out = String::new();
    push_plain_text(node, &mut out);
    out
}

/// Reading-order text of a sibling list.
#[must_use]
pub fn plain_text_of(nodes: &[DocumentNode]) -> String {
    let mut out = String::new();
    push_siblings(nodes, &mut out);
    out
}

fn push_plain_text(node: &DocumentNode, out: &mut String) {
    match node {
        DocumentNode::Text(text) => out.push_str(&text.text),
        DocumentNode::Tab => out.push('\t'),
        DocumentNode::LineBreak => out.push('\n'),
        _ => {
            if let Some(children) = node.children() {
                push_siblings(children, out);
            }
        }
    }
}

fn push_siblings(nodes: &[DocumentNode], out: &mut String) {
    for node in nodes {
        if node.is_block() && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        push_plain_text(node, out);
    }
}

/// Collect the blocks of `document` that feedback can anchor to.
///
/// Every visually non-empty top-level block with a built-in renderer yields
/// one entry; lists contribute one entry per item. Orders are 1-based and count only emitted
/// blocks, so an empty paragraph never shifts the ids of later blocks.
#[must_use]
pub fn feedback_blocks(document: &Document) -> Vec<FeedbackBlock> {
    let mut bodies = Vec::new();
    match &document.root {
        DocumentNode::Root(container) => collect_bodies(&container.children, &mut bodies),
        other => collect_bodies(std::slice::from_ref(other), &mut bodies),
    }

    tracing::debug!(count = bodies.len(), "Collected feedback blocks");

    (1_u64..)
        .zip(bodies)
        .map(|(order, body)| FeedbackBlock::new(&body, order))
        .collect()
}

fn collect_bodies(nodes: &[DocumentNode], bodies: &mut Vec<String>) {
    for node in nodes {
        match node {
            DocumentNode::Root(container) => collect_bodies(&container.children, bodies),
            DocumentNode::List(list) => collect_bodies(&list.children, bodies),
            DocumentNode::Paragraph(_)
            | DocumentNode::Heading(_)
            | DocumentNode::Quote(_)
            | DocumentNode::ListItem(_)
            | DocumentNode::CodeBlock(_) => {
                if !is_node_empty(node) {
                    bodies.push(plain_text(node));
                }
            }
            // Nodes without a built-in renderer take no order.
            _ => {}
        }
    }
}
