//! Visual emptiness of blocks.

use crate::node::DocumentNode;

/// Check whether a block's children render no visible content.
///
/// Line breaks and tabs are invisible, text counts only when it has
/// non-whitespace characters, and containers are empty when all their
/// children are. Malformed nodes are empty. Leaves of other kinds (rules,
/// unknown embeds) are assumed visible.
#[must_use]
pub fn is_visually_empty(children: &[DocumentNode]) -> bool {
    children.iter().all(is_node_empty)
}

/// Check a single node with the same rules as [`is_visually_empty`].
#[must_use]
pub fn is_node_empty(node: &DocumentNode) -> bool {
    match node {
        DocumentNode::LineBreak | DocumentNode::Tab => true,
        DocumentNode::Text(text) => text.text.trim().is_empty(),
        DocumentNode::Unknown(unknown) if unknown.malformed => true,
        _ => node.children().is_some_and(is_visually_empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Link, UnknownNode};
    use serde_json::Value;

    fn text(s: &str) -> DocumentNode {
        DocumentNode::text(s, 0)
    }

    fn unknown(children: Option<Vec<DocumentNode>>) -> DocumentNode {
        DocumentNode::Unknown(UnknownNode {
            kind: "upload".to_owned(),
            children,
            data: Value::Null,
            malformed: false,
        })
    }

    #[test]
    fn test_empty_sequence() {
        assert!(is_visually_empty(&[]));
    }

    #[test]
    fn test_linebreak_only() {
        assert!(is_visually_empty(&[DocumentNode::LineBreak]));
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        assert!(is_visually_empty(&[text("")]));
        assert!(is_visually_empty(&[text("   ")]));
        assert!(is_visually_empty(&[text(" \n\t"), DocumentNode::LineBreak]));
    }

    #[test]
    fn test_visible_text() {
        assert!(!is_visually_empty(&[text("Hello")]));
        assert!(!is_visually_empty(&[DocumentNode::LineBreak, text(" x ")]));
    }

    #[test]
    fn test_nested_containers() {
        let link = DocumentNode::Link(Link {
            url: Some("https://example.com".to_owned()),
            children: vec![text("  ")],
            ..Default::default()
        });
        assert!(is_visually_empty(&[link]));

        let link = DocumentNode::Link(Link {
            children: vec![text("visible")],
            ..Default::default()
        });
        assert!(!is_visually_empty(&[text(" "), link]));
    }

    #[test]
    fn test_childless_leaf_is_not_empty() {
        assert!(!is_visually_empty(&[DocumentNode::HorizontalRule]));
        assert!(!is_visually_empty(&[unknown(None)]));
    }

    #[test]
    fn test_unknown_with_empty_children() {
        assert!(is_visually_empty(&[unknown(Some(vec![text(" ")]))]));
        assert!(!is_visually_empty(&[unknown(Some(vec![text("caption")]))]));
    }

    #[test]
    fn test_malformed_node_is_empty() {
        let malformed = DocumentNode::from_value(serde_json::json!({"type": "text", "text": 42}));
        assert!(is_visually_empty(&[malformed.clone()]));
        assert!(!is_visually_empty(&[malformed, text("ok")]));
    }

    #[test]
    fn test_container_with_no_children() {
        assert!(is_node_empty(&DocumentNode::paragraph(vec![])));
    }
}
