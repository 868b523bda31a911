//! Inline text run rendering.
//!
//! Text nodes are rendered one sibling index at a time. Consecutive siblings
//! that all carry the [`ANCHOR`] bit are merged under a single anchor element,
//! so `console.` + **`log()`** becomes one `<code>` instead of two adjacent
//! ones. Other bits never merge.

use crate::format::{ANCHOR, Format};
use crate::markup::{Element, Markup};
use crate::node::{DocumentNode, TextNode};

/// Render the text node at `index` among `siblings`.
///
/// Returns `None` when the node is not text or when it was already emitted as
/// part of a run started by an earlier sibling. Rendering every index in order
/// and keeping the `Some` results reproduces all text exactly once.
#[must_use]
pub fn render_text_run(siblings: &[DocumentNode], index: usize) -> Option<Markup> {
    let node = as_text(siblings.get(index)?)?;

    if !node.format.contains(ANCHOR) {
        return Some(wrap_formatted(node.format, Markup::text(&node.text)));
    }

    // Continuation of a run opened by the previous sibling.
    if index > 0 && carries_anchor(&siblings[index - 1]) {
        return None;
    }

    let members = siblings[index..]
        .iter()
        .map_while(|sibling| as_text(sibling).filter(|text| text.format.contains(ANCHOR)))
        .map(|text| wrap_formatted(text.format.without(ANCHOR), Markup::text(&text.text)))
        .collect();

    Some(Element::new(ANCHOR.tag()).with_children(members).into())
}

/// Wrap `content` in one element per active flag, outermost flag first.
#[must_use]
pub fn wrap_formatted(format: Format, content: Markup) -> Markup {
    format
        .flags()
        .rev()
        .fold(content, |inner, flag| Markup::element(flag.tag(), vec![inner]))
}

fn as_text(node: &DocumentNode) -> Option<&TextNode> {
    match node {
        DocumentNode::Text(text) => Some(text),
        _ => None,
    }
}

fn carries_anchor(node: &DocumentNode) -> bool {
    as_text(node).is_some_and(|text| text.format.contains(ANCHOR))
}
