//! Inline format bitmask.
//!
//! Text nodes carry an integer where each bit toggles one inline style. The
//! bit positions are fixed by the editor that produces the documents.

use serde::Deserialize;

/// A single inline style bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FormatFlag {
    Bold = 1,
    Italic = 1 << 1,
    Strikethrough = 1 << 2,
    Underline = 1 << 3,
    Code = 1 << 4,
    Subscript = 1 << 5,
    Superscript = 1 << 6,
    Highlight = 1 << 7,
}

/// Style bits with their element tags, ordered outer to inner.
const NESTING: [(FormatFlag, &str); 8] = [
    (FormatFlag::Code, "code"),
    (FormatFlag::Superscript, "sup"),
    (FormatFlag::Subscript, "sub"),
    (FormatFlag::Highlight, "mark"),
    (FormatFlag::Underline, "u"),
    (FormatFlag::Strikethrough, "s"),
    (FormatFlag::Italic, "em"),
    (FormatFlag::Bold, "strong"),
];

/// The bit that merges consecutive sibling runs into one element.
pub const ANCHOR: FormatFlag = FormatFlag::Code;

impl FormatFlag {
    /// Bit value of this flag.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Element tag this flag renders as.
    #[must_use]
    pub fn tag(self) -> &'static str {
        NESTING
            .iter()
            .find(|&&(flag, _)| flag == self)
            .map_or("span", |&(_, tag)| tag)
    }
}

/// Set of inline style bits attached to a text node.
///
/// Unassigned bits are kept but never rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Format(u32);

impl Format {
    /// No formatting.
    pub const PLAIN: Self = Self(0);

    /// Wrap a raw bitmask.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: FormatFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Copy of this set with `flag` added.
    #[must_use]
    pub const fn with(self, flag: FormatFlag) -> Self {
        Self(self.0 | flag.bit())
    }

    /// Copy of this set with `flag` removed.
    #[must_use]
    pub const fn without(self, flag: FormatFlag) -> Self {
        Self(self.0 & !flag.bit())
    }

    /// Active flags in nesting order, outermost first.
    ///
    /// The order depends only on the table, never on the bit values, so the
    /// same bitmask always nests the same way.
    pub fn flags(self) -> impl DoubleEndedIterator<Item = FormatFlag> {
        NESTING
            .into_iter()
            .map(|(flag, _)| flag)
            .filter(move |flag| self.contains(*flag))
    }
}

impl From<u32> for Format {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_match_editor_contract() {
        assert_eq!(FormatFlag::Bold.bit(), 1);
        assert_eq!(FormatFlag::Italic.bit(), 2);
        assert_eq!(FormatFlag::Code.bit(), 16);
        assert_eq!(FormatFlag::Highlight.bit(), 128);
    }

    #[test]
    fn test_tags() {
        assert_eq!(FormatFlag::Bold.tag(), "strong");
        assert_eq!(FormatFlag::Italic.tag(), "em");
        assert_eq!(FormatFlag::Code.tag(), "code");
        assert_eq!(FormatFlag::Strikethrough.tag(), "s");
    }

    #[test]
    fn test_flags_in_nesting_order() {
        let flags: Vec<_> = Format::new(1 | 2 | 16).flags().collect();
        assert_eq!(
            flags,
            vec![FormatFlag::Code, FormatFlag::Italic, FormatFlag::Bold]
        );
    }

    #[test]
    fn test_flags_ignore_unassigned_bits() {
        let flags: Vec<_> = Format::new((1 << 12) | 1).flags().collect();
        assert_eq!(flags, vec![FormatFlag::Bold]);
    }

    #[test]
    fn test_plain_has_no_flags() {
        assert_eq!(Format::PLAIN.flags().count(), 0);
    }

    #[test]
    fn test_with_and_without() {
        let format = Format::PLAIN.with(FormatFlag::Code).with(FormatFlag::Bold);
        assert_eq!(format.bits(), 17);
        assert!(format.contains(FormatFlag::Code));
        let format = format.without(FormatFlag::Code);
        assert_eq!(format.bits(), 1);
        assert!(!format.contains(FormatFlag::Code));
    }

    #[test]
    fn test_deserialize_transparent() {
        let format: Format = serde_json::from_str("17").unwrap();
        assert_eq!(format, Format::new(17));
    }
}
