//! Caller-supplied node renderers.
//!
//! Overrides are consulted before any built-in handler. They are keyed either
//! by the element tag a node intrinsically renders as (`h2`, `ol`, `a`) or by
//! the node's `type` (`heading`, `upload`). Tag keys win over type keys.

use std::collections::HashMap;

use crate::markup::Markup;
use crate::node::DocumentNode;

/// Renders one node in place of the built-in handler.
///
/// Container nodes receive their children already rendered; leaves receive
/// `None`. Returning `None` renders nothing for the node.
///
/// # Example
///
/// ```
/// use folio_renderer::{DocumentNode, DocumentRenderer, Markup, NodeOverride};
///
/// struct Callout;
///
/// impl NodeOverride for Callout {
///     fn render(&self, _node: &DocumentNode, children: Option<Vec<Markup>>) -> Option<Markup> {
///         Some(Markup::element("aside", children.unwrap_or_default()))
///     }
/// }
///
/// let renderer = DocumentRenderer::new().with_override("quote", Callout);
/// ```
pub trait NodeOverride: Send + Sync {
    /// Render `node`.
    fn render(&self, node: &DocumentNode, children: Option<Vec<Markup>>) -> Option<Markup>;
}

impl<F> NodeOverride for F
where
    F: Fn(&DocumentNode, Option<Vec<Markup>>) -> Option<Markup> + Send + Sync,
{
    fn render(&self, node: &DocumentNode, children: Option<Vec<Markup>>) -> Option<Markup> {
        self(node, children)
    }
}

/// Map from tag or type key to override.
#[derive(Default)]
pub struct Overrides {
    handlers: HashMap<String, Box<dyn NodeOverride>>,
}

impl Overrides {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `key`, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, handler: impl NodeOverride + 'static) {
        self.handlers.insert(key.into(), Box::new(handler));
    }

    /// Find the override for `node`, tag key first.
    #[must_use]
    pub fn lookup(&self, node: &DocumentNode) -> Option<&dyn NodeOverride> {
        if self.handlers.is_empty() {
            return None;
        }
        node.tag_name()
            .and_then(|tag| self.handlers.get(tag))
            .or_else(|| self.handlers.get(node.kind()))
            .map(Box::as_ref)
    }

    /// Number of registered overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort();
        f.debug_struct("Overrides").field("keys", &keys).finish()
    }
}
