//! Content-addressed block identifiers for Folio.
//!
//! Feedback tooling anchors comments to a block of a rendered document. The
//! anchor must survive edits elsewhere in the document, so it is derived from
//! the block's own normalized text plus its 1-based position instead of from
//! tree paths or database ids.
//!
//! # Example
//!
//! ```
//! use folio_sections::create_feedback_block_id;
//!
//! let id = create_feedback_block_id("  Alpha   beta \n\t gamma  ", 3.0);
//! assert_eq!(id, create_feedback_block_id("Alpha beta gamma", 3.0));
//! assert!(id.starts_with("fb-"));
//! assert_eq!(id.len(), 11);
//! ```

mod hash;

pub use hash::fnv1a_hex;

/// Prefix of every feedback block identifier.
pub const FEEDBACK_ID_PREFIX: &str = "fb-";

/// Body used when a block has no text after normalization.
const EMPTY_BODY_PLACEHOLDER: &str = "section";

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Idempotent: normalizing an already normalized body returns it unchanged.
///
/// ```
/// use folio_sections::normalize_body;
///
/// assert_eq!(normalize_body("  Alpha   beta \n\t gamma  "), "Alpha beta gamma");
/// ```
#[must_use]
pub fn normalize_body(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a block position coming from upstream callers.
///
/// Non-finite and non-positive values become `1`; everything else is floored.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_order(order: f64) -> u64 {
    if !order.is_finite() || order <= 0.0 {
        return 1;
    }
    // Saturates for values beyond u64::MAX.
    order.floor() as u64
}

/// Derive the feedback anchor id for a block.
///
/// Returns `fb-` followed by the 8-digit FNV-1a hash of `"{order}:{body}"`,
/// where both parts are normalized first. An empty body is replaced with a
/// fixed placeholder so every block still gets a well-formed id.
#[must_use]
pub fn create_feedback_block_id(body: &str, order: f64) -> String {
    let mut normalized_body = normalize_body(body);
    if normalized_body.is_empty() {
        normalized_body = EMPTY_BODY_PLACEHOLDER.to_owned();
    }
    let normalized_order = normalize_order(order);
    let key = format!("{normalized_order}:{normalized_body}");
    format!("{FEEDBACK_ID_PREFIX}{}", fnv1a_hex(&key))
}

/// A block of a document that feedback can be attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackBlock {
    /// Anchor id (`fb-xxxxxxxx`).
    pub id: String,
    /// 1-based position among the document's feedback blocks.
    pub order: u64,
    /// Normalized block text.
    pub body: String,
}

impl FeedbackBlock {
    /// Build a block from raw text and its position, normalizing both.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(body: &str, order: u64) -> Self {
        let order = normalize_order(order as f64);
        Self {
            id: create_feedback_block_id(body, order as f64),
            order,
            body: normalize_body(body),
        }
    }
}
