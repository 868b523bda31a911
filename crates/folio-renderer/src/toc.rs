//! Table of contents extraction.

use std::collections::HashMap;

use folio_sections::normalize_body;

use crate::node::{Document, DocumentNode};
use crate::text::plain_text;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Collect every non-empty heading of `document` in reading order.
///
/// Ids are slugs of the heading text; repeated slugs get `-1`, `-2`, ...
/// suffixes.
#[must_use]
pub fn table_of_contents(document: &Document) -> Vec<TocEntry> {
    let mut builder = TocBuilder::default();
    builder.visit(&document.root);
    builder.entries
}

#[derive(Default)]
struct TocBuilder {
    entries: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

impl TocBuilder {
    fn visit(&mut self, node: &DocumentNode) {
        if let DocumentNode::Heading(heading) = node {
            let title = normalize_body(&plain_text(node));
            if !title.is_empty() {
                let id = self.generate_id(&title);
                self.entries.push(TocEntry {
                    level: heading.tag.level(),
                    title,
                    id,
                });
            }
            return;
        }
        for child in node.children().unwrap_or_default() {
            self.visit(child);
        }
    }

    /// Generate a unique ID for a heading.
    fn generate_id(&mut self, text: &str) -> String {
        let base_id = slugify(text);
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
