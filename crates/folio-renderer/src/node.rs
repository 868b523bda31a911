//! Document node model.
//!
//! Documents arrive as the JSON serialization of an editor state:
//! `{"root": {"type": "root", "children": [...]}}`. Every node carries a
//! `type` discriminator; containers carry ordered `children`.
//!
//! Deserialization never fails below the root: a node with an unknown
//! `type`, or with a payload that does not fit its declared type, becomes
//! [`DocumentNode::Unknown`] so the rest of the document still renders.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::Format;

/// Error loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Input is not valid JSON or has no `root`.
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A serialized rich-text document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Document {
    /// Root node, normally of type `root`.
    pub root: DocumentNode,
}

impl Document {
    /// Wrap an already built root node.
    #[must_use]
    pub fn new(root: DocumentNode) -> Self {
        Self { root }
    }

    /// Parse a document from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// One node of the document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentNode {
    Root(Container),
    Paragraph(Container),
    Heading(Heading),
    Quote(Container),
    List(List),
    ListItem(ListItem),
    Link(Link),
    CodeBlock(CodeBlock),
    Text(TextNode),
    Tab,
    LineBreak,
    HorizontalRule,
    Unknown(UnknownNode),
}

/// Generic block with only children.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Heading level tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Element tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Heading level (1-6).
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Heading {
    pub tag: HeadingTag,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Kind of list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Bullet,
    Number,
    Check,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default)]
    pub list_type: ListType,
    /// Explicit element tag (`ul` / `ol`), when the editor provides one.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default = "default_list_start")]
    pub start: u32,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

fn default_list_start() -> u32 {
    1
}

impl List {
    /// Whether the list renders as `<ol>`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.list_type == ListType::Number || self.tag.as_deref() == Some("ol")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub value: Option<u32>,
    /// Set only for items of check lists.
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Extra link attributes as stored by CMS link fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFields {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub fields: Option<LinkFields>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

impl Link {
    /// Link destination, from `url` or `fields.url`.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or_else(|| self.fields.as_ref().and_then(|f| f.url.as_deref()))
            .filter(|url| !url.is_empty())
    }

    /// Whether the link opens in a new tab.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        self.fields.as_ref().is_some_and(|f| f.new_tab)
            || self.target.as_deref() == Some("_blank")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Run of text sharing one format bitmask.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub format: Format,
    /// Set for `code-highlight` tokens inside code blocks.
    #[serde(skip)]
    pub code_highlight: bool,
}

/// Node of a type the renderer has no built-in handler for.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownNode {
    /// Value of the `type` field (empty when missing).
    pub kind: String,
    /// Children, when the node had a `children` array.
    pub children: Option<Vec<DocumentNode>>,
    /// Remaining raw fields.
    pub data: Value,
    /// The `type` is a known one but the payload did not fit it. Malformed
    /// nodes count as visually empty.
    pub malformed: bool,
}

impl UnknownNode {
    fn from_value(kind: String, mut data: Value, malformed: bool) -> Self {
        let children = match data.as_object_mut().and_then(|map| map.remove("children")) {
            Some(Value::Array(items)) => {
                Some(items.into_iter().map(DocumentNode::from_value).collect())
            }
            _ => None,
        };
        Self {
            kind,
            children,
            data,
            malformed,
        }
    }
}

impl<'de> Deserialize<'de> for DocumentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl DocumentNode {
    /// Build a node from raw JSON, degrading to [`DocumentNode::Unknown`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let parsed = match kind.as_str() {
            "root" => Container::deserialize(&value).map(Self::Root),
            "paragraph" => Container::deserialize(&value).map(Self::Paragraph),
            "heading" => Heading::deserialize(&value).map(Self::Heading),
            "quote" => Container::deserialize(&value).map(Self::Quote),
            "list" => List::deserialize(&value).map(Self::List),
            "listitem" => ListItem::deserialize(&value).map(Self::ListItem),
            "link" | "autolink" => Link::deserialize(&value).map(Self::Link),
            "code" => CodeBlock::deserialize(&value).map(Self::CodeBlock),
            "text" => TextNode::deserialize(&value).map(Self::Text),
            "code-highlight" => TextNode::deserialize(&value).map(|text| {
                Self::Text(TextNode {
                    code_highlight: true,
                    ..text
                })
            }),
            "tab" => Ok(Self::Tab),
            "linebreak" => Ok(Self::LineBreak),
            "horizontalrule" => Ok(Self::HorizontalRule),
            _ => return Self::Unknown(UnknownNode::from_value(kind, value, false)),
        };

        parsed.unwrap_or_else(|e| {
            tracing::debug!(node_type = %kind, error = %e, "Malformed node, treating as unknown");
            Self::Unknown(UnknownNode::from_value(kind, value, true))
        })
    }

    /// Text node with the given format bits.
    #[must_use]
    pub fn text(text: impl Into<String>, format: u32) -> Self {
        Self::Text(TextNode {
            text: text.into(),
            format: Format::new(format),
            code_highlight: false,
        })
    }

    /// Paragraph containing `children`.
    #[must_use]
    pub fn paragraph(children: Vec<DocumentNode>) -> Self {
        Self::Paragraph(Container { children })
    }

    /// Root node containing `children`.
    #[must_use]
    pub fn root(children: Vec<DocumentNode>) -> Self {
        Self::Root(Container { children })
    }

    /// Value of the node's `type` discriminator.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Root(_) => "root",
            Self::Paragraph(_) => "paragraph",
            Self::Heading(_) => "heading",
            Self::Quote(_) => "quote",
            Self::List(_) => "list",
            Self::ListItem(_) => "listitem",
            Self::Link(_) => "link",
            Self::CodeBlock(_) => "code",
            Self::Text(text) if text.code_highlight => "code-highlight",
            Self::Text(_) => "text",
            Self::Tab => "tab",
            Self::LineBreak => "linebreak",
            Self::HorizontalRule => "horizontalrule",
            Self::Unknown(node) => &node.kind,
        }
    }

    /// Element tag the node intrinsically renders as, if any.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'static str> {
        match self {
            Self::Paragraph(_) => Some("p"),
            Self::Heading(heading) => Some(heading.tag.as_str()),
            Self::Quote(_) => Some("blockquote"),
            Self::List(list) => Some(if list.is_ordered() { "ol" } else { "ul" }),
            Self::ListItem(_) => Some("li"),
            Self::Link(_) => Some("a"),
            Self::CodeBlock(_) => Some("pre"),
            Self::LineBreak => Some("br"),
            Self::HorizontalRule => Some("hr"),
            Self::Root(_) | Self::Text(_) | Self::Tab | Self::Unknown(_) => None,
        }
    }

    /// Ordered children, or `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[DocumentNode]> {
        match self {
            Self::Root(c) | Self::Paragraph(c) | Self::Quote(c) => Some(&c.children),
            Self::Heading(heading) => Some(&heading.children),
            Self::List(list) => Some(&list.children),
            Self::ListItem(item) => Some(&item.children),
            Self::Link(link) => Some(&link.children),
            Self::CodeBlock(code) => Some(&code.children),
            Self::Unknown(node) => node.children.as_deref(),
            Self::Text(_) | Self::Tab | Self::LineBreak | Self::HorizontalRule => None,
        }
    }

    /// Whether the node is block-level (separated from siblings in plain text).
    #[must_use]
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Root(_)
                | Self::Paragraph(_)
                | Self::Heading(_)
                | Self::Quote(_)
                | Self::List(_)
                | Self::ListItem(_)
                | Self::CodeBlock(_)
                | Self::HorizontalRule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(value: Value) -> DocumentNode {
        DocumentNode::from_value(value)
    }

    #[test]
    fn test_parse_paragraph_with_text() {
        let parsed = node(json!({
            "type": "paragraph",
            "format": "",
            "indent": 0,
            "version": 1,
            "children": [
                {"type": "text", "text": "Hello", "format": 1, "mode": "normal", "style": ""},
                {"type": "linebreak", "version": 1}
            ]
        }));
        assert_eq!(
            parsed,
            DocumentNode::paragraph(vec![
                DocumentNode::text("Hello", 1),
                DocumentNode::LineBreak
            ])
        );
    }

    #[test]
    fn test_parse_heading() {
        let parsed = node(json!({"type": "heading", "tag": "h3", "children": []}));
        let DocumentNode::Heading(heading) = parsed else {
            panic!("expected heading");
        };
        assert_eq!(heading.tag, HeadingTag::H3);
        assert_eq!(heading.tag.level(), 3);
    }

    #[test]
    fn test_parse_list() {
        let parsed = node(json!({
            "type": "list",
            "listType": "number",
            "tag": "ol",
            "start": 3,
            "children": [{"type": "listitem", "value": 3, "children": []}]
        }));
        let DocumentNode::List(list) = parsed else {
            panic!("expected list");
        };
        assert!(list.is_ordered());
        assert_eq!(list.start, 3);
        assert_eq!(list.children.len(), 1);
    }

    #[test]
    fn test_parse_link_fields() {
        let parsed = node(json!({
            "type": "link",
            "fields": {"url": "https://example.com", "newTab": true, "linkType": "custom"},
            "children": [{"type": "text", "text": "site"}]
        }));
        let DocumentNode::Link(link) = parsed else {
            panic!("expected link");
        };
        assert_eq!(link.href(), Some("https://example.com"));
        assert!(link.opens_new_tab());
    }

    #[test]
    fn test_parse_autolink_url() {
        let parsed = node(json!({"type": "autolink", "url": "https://a.test", "children": []}));
        let DocumentNode::Link(link) = parsed else {
            panic!("expected link");
        };
        assert_eq!(link.href(), Some("https://a.test"));
        assert!(!link.opens_new_tab());
    }

    #[test]
    fn test_parse_code_highlight_as_text() {
        let parsed = node(json!({
            "type": "code-highlight",
            "text": "let",
            "highlightType": "keyword"
        }));
        let DocumentNode::Text(ref token) = parsed else {
            panic!("expected text");
        };
        assert_eq!(token.text, "let");
        assert!(token.code_highlight);
        assert_eq!(parsed.kind(), "code-highlight");
        assert_eq!(node(json!({"type": "text", "text": "let"})).kind(), "text");
    }

    #[test]
    fn test_unknown_type_keeps_payload() {
        let parsed = node(json!({
            "type": "upload",
            "value": {"id": 7},
            "children": [{"type": "text", "text": "caption"}]
        }));
        let DocumentNode::Unknown(unknown) = parsed else {
            panic!("expected unknown");
        };
        assert_eq!(unknown.kind, "upload");
        assert_eq!(unknown.data["value"]["id"], 7);
        assert!(unknown.data.get("children").is_none());
        assert_eq!(
            unknown.children,
            Some(vec![DocumentNode::text("caption", 0)])
        );
    }

    #[test]
    fn test_malformed_known_type_becomes_unknown() {
        let parsed = node(json!({"type": "heading", "tag": "h9", "children": []}));
        assert!(matches!(
            parsed,
            DocumentNode::Unknown(ref u) if u.kind == "heading" && u.malformed
        ));
        assert_eq!(parsed.kind(), "heading");
    }

    #[test]
    fn test_unknown_type_is_not_malformed() {
        let parsed = node(json!({"type": "mention", "children": []}));
        assert!(matches!(parsed, DocumentNode::Unknown(ref u) if !u.malformed));
    }

    #[test]
    fn test_missing_type_is_unknown() {
        let parsed = node(json!({"text": "orphan"}));
        assert!(matches!(parsed, DocumentNode::Unknown(ref u) if u.kind.is_empty()));
    }

    #[test]
    fn test_malformed_child_does_not_break_parent() {
        let parsed = node(json!({
            "type": "paragraph",
            "children": [
                {"type": "text", "text": 42},
                {"type": "text", "text": "ok"}
            ]
        }));
        let children = parsed.children().unwrap();
        assert!(matches!(children[0], DocumentNode::Unknown(_)));
        assert_eq!(children[1], DocumentNode::text("ok", 0));
    }

    #[test]
    fn test_document_from_json() {
        let doc = Document::from_json(
            r#"{"root": {"type": "root", "children": [{"type": "paragraph", "children": []}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.root, DocumentNode::root(vec![DocumentNode::paragraph(vec![])]));
    }

    #[test]
    fn test_document_without_root_is_error() {
        assert!(Document::from_json(r#"{"children": []}"#).is_err());
        assert!(Document::from_json("not json").is_err());
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(DocumentNode::paragraph(vec![]).tag_name(), Some("p"));
        assert_eq!(DocumentNode::LineBreak.tag_name(), Some("br"));
        assert_eq!(DocumentNode::text("x", 0).tag_name(), None);
    }
}
