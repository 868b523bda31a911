//! Document tree renderer.

use crate::empty::is_visually_empty;
use crate::inline::render_text_run;
use crate::markup::{Element, Markup, to_html};
use crate::node::{CodeBlock, Document, DocumentNode, Link, List, ListItem};
use crate::overrides::{NodeOverride, Overrides};
use crate::text::plain_text_of;

/// What to emit for paragraph-like blocks with no visible content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyBlocks {
    /// Render nothing.
    #[default]
    Omit,
    /// Render the block element containing a single `<br>`.
    Spacer,
}

/// Renders document trees to markup trees.
///
/// Overrides registered with [`with_override`](Self::with_override) are tried
/// first for every node; built-in handlers are the fallback. Nodes with no
/// override and no built-in handler render nothing, and their siblings are
/// unaffected.
///
/// The renderer holds no per-render state, so one instance can be shared
/// across threads and documents.
///
/// # Example
///
/// ```
/// use folio_renderer::{Document, DocumentRenderer};
///
/// let document = Document::from_json(r#"{"root": {"type": "root", "children": [
///     {"type": "paragraph", "children": [
///         {"type": "text", "text": "console.", "format": 16},
///         {"type": "text", "text": "log()", "format": 17}
///     ]}
/// ]}}"#).unwrap();
///
/// let html = DocumentRenderer::new().render_html(&document);
/// assert_eq!(html, "<p><code>console.<strong>log()</strong></code></p>");
/// ```
#[derive(Debug, Default)]
pub struct DocumentRenderer {
    overrides: Overrides,
    empty_blocks: EmptyBlocks,
}

impl DocumentRenderer {
    /// Create a renderer with no overrides that omits empty blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for a tag name or node type.
    #[must_use]
    pub fn with_override(
        mut self,
        key: impl Into<String>,
        handler: impl NodeOverride + 'static,
    ) -> Self {
        self.overrides.insert(key, handler);
        self
    }

    /// Set the policy for visually empty paragraphs, headings and quotes.
    #[must_use]
    pub fn with_empty_blocks(mut self, policy: EmptyBlocks) -> Self {
        self.empty_blocks = policy;
        self
    }

    /// Render a document.
    #[must_use]
    pub fn render(&self, document: &Document) -> Vec<Markup> {
        self.render_tree(&document.root)
    }

    /// Render a document straight to HTML.
    #[must_use]
    pub fn render_html(&self, document: &Document) -> String {
        to_html(&self.render(document))
    }

    /// Render a tree starting at `root`.
    ///
    /// A `root` node contributes its children without a wrapper unless a
    /// `root` override is registered. Any other node is rendered as the only
    /// member of a sibling list.
    #[must_use]
    pub fn render_tree(&self, root: &DocumentNode) -> Vec<Markup> {
        match root {
            DocumentNode::Root(container) if self.overrides.lookup(root).is_none() => {
                self.render_children(&container.children)
            }
            _ => self.render_children(std::slice::from_ref(root)),
        }
    }

    /// Render an ordered sibling list.
    ///
    /// Links without a destination have no element of their own; their
    /// children are spliced into the list in place of the link.
    fn render_children(&self, children: &[DocumentNode]) -> Vec<Markup> {
        let mut rendered = Vec::with_capacity(children.len());
        for (index, node) in children.iter().enumerate() {
            match node {
                DocumentNode::Link(link)
                    if link.href().is_none() && self.overrides.lookup(node).is_none() =>
                {
                    rendered.extend(self.render_children(&link.children));
                }
                _ => rendered.extend(self.render_child(children, index)),
            }
        }
        rendered
    }

    fn render_child(&self, siblings: &[DocumentNode], index: usize) -> Option<Markup> {
        let node = &siblings[index];

        if let Some(handler) = self.overrides.lookup(node) {
            tracing::debug!(node_type = node.kind(), "Rendering node with override");
            let children = node.children().map(|children| self.render_children(children));
            return handler.render(node, children);
        }

        match node {
            DocumentNode::Text(_) => render_text_run(siblings, index),
            DocumentNode::Paragraph(container) => self.render_block("p", &container.children),
            DocumentNode::Heading(heading) => {
                self.render_block(heading.tag.as_str(), &heading.children)
            }
            DocumentNode::Quote(container) => {
                self.render_block("blockquote", &container.children)
            }
            DocumentNode::List(list) => Some(self.render_list(list)),
            DocumentNode::ListItem(item) => Some(self.render_list_item(item)),
            DocumentNode::Link(link) => link.href().map(|href| self.render_link(link, href)),
            DocumentNode::CodeBlock(code) => Some(render_code_block(code)),
            DocumentNode::Tab => Some(Markup::text("\t")),
            DocumentNode::LineBreak => Some(Markup::element("br", Vec::new())),
            DocumentNode::HorizontalRule => Some(Markup::element("hr", Vec::new())),
            DocumentNode::Root(_) | DocumentNode::Unknown(_) => {
                tracing::debug!(node_type = node.kind(), "No renderer for node, skipping");
                None
            }
        }
    }

    fn render_block(&self, tag: &str, children: &[DocumentNode]) -> Option<Markup> {
        if is_visually_empty(children) {
            return match self.empty_blocks {
                EmptyBlocks::Omit => None,
                EmptyBlocks::Spacer => Some(Markup::element(
                    tag,
                    vec![Markup::element("br", Vec::new())],
                )),
            };
        }
        Some(Markup::element(tag, self.render_children(children)))
    }

    fn render_list(&self, list: &List) -> Markup {
        let mut element = Element::new(if list.is_ordered() { "ol" } else { "ul" });
        if list.is_ordered() && list.start != 1 {
            element = element.with_attr("start", list.start.to_string());
        }
        element
            .with_children(self.render_children(&list.children))
            .into()
    }

    fn render_list_item(&self, item: &ListItem) -> Markup {
        let mut children = Vec::with_capacity(item.children.len() + 1);
        if let Some(checked) = item.checked {
            let mut checkbox = Element::new("input").with_attr("type", "checkbox");
            if checked {
                checkbox = checkbox.with_attr("checked", "");
            }
            children.push(checkbox.with_attr("disabled", "").into());
        }
        children.extend(self.render_children(&item.children));
        Markup::element("li", children)
    }

    fn render_link(&self, link: &Link, href: &str) -> Markup {
        let mut element = Element::new("a").with_attr("href", href);
        if link.opens_new_tab() {
            element = element
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer");
        }
        element
            .with_children(self.render_children(&link.children))
            .into()
    }
}

fn render_code_block(code: &CodeBlock) -> Markup {
    let mut inner = Element::new("code");
    if let Some(language) = code.language.as_deref().filter(|l| !l.is_empty()) {
        inner = inner.with_attr("class", format!("language-{language}"));
    }
    let source = plain_text_of(&code.children);
    Markup::element("pre", vec![inner.with_children(vec![Markup::text(source)]).into()])
}
