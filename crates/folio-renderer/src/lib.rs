//! Rich-text document renderer for Folio.
//!
//! Turns the serialized tree produced by a rich-text editor into a tree of
//! generic markup nodes, and extracts the text blocks feedback tooling anchors
//! to.
//!
//! # Architecture
//!
//! - [`Format`] models the inline style bitmask and its nesting order.
//! - [`render_text_run`] renders one text node of a sibling list, merging
//!   consecutive inline-code runs under a single `<code>`.
//! - [`is_visually_empty`] decides whether a block shows anything at all.
//! - [`DocumentRenderer`] walks the tree, consulting caller [`NodeOverride`]s
//!   before the built-in handlers.
//!
//! Table of contents and feedback block extraction ([`table_of_contents`],
//! [`feedback_blocks`]) are separate traversals over the same input.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{Document, DocumentRenderer, EmptyBlocks, feedback_blocks};
//!
//! let json = r#"{"root": {"type": "root", "children": [
//!     {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Intro"}]},
//!     {"type": "paragraph", "children": []},
//!     {"type": "paragraph", "children": [{"type": "text", "text": "Hello", "format": 1}]}
//! ]}}"#;
//! let document = Document::from_json(json).unwrap();
//!
//! let html = DocumentRenderer::new()
//!     .with_empty_blocks(EmptyBlocks::Omit)
//!     .render_html(&document);
//! assert_eq!(html, "<h2>Intro</h2><p><strong>Hello</strong></p>");
//!
//! let blocks = feedback_blocks(&document);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[1].body, "Hello");
//! ```

mod empty;
mod format;
mod inline;
mod markup;
mod node;
mod overrides;
mod renderer;
mod text;
mod toc;

pub use empty::{is_node_empty, is_visually_empty};
pub use format::{ANCHOR, Format, FormatFlag};
pub use inline::{render_text_run, wrap_formatted};
pub use markup::{Element, Markup, escape_html, to_html};
pub use node::{
    CodeBlock, Container, Document, DocumentError, DocumentNode, Heading, HeadingTag, Link,
    LinkFields, List, ListItem, ListType, TextNode, UnknownNode,
};
pub use overrides::{NodeOverride, Overrides};
pub use renderer::{DocumentRenderer, EmptyBlocks};
pub use text::{feedback_blocks, plain_text, plain_text_of};
pub use toc::{TocEntry, slugify, table_of_contents};

pub use folio_sections::{FeedbackBlock, create_feedback_block_id};
