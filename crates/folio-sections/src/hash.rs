//! 32-bit FNV-1a hashing for block identifiers.
//!
//! Identifiers are stored by external feedback systems, so the constants and
//! output format here must never change.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a string with 32-bit FNV-1a and format it as 8 lowercase hex digits.
///
/// Input is consumed as UTF-16 code units, matching identifiers produced by
/// browser-side tooling. For ASCII and the rest of the Basic Multilingual
/// Plane every unit equals the character's code point.
///
/// ```
/// use folio_sections::fnv1a_hex;
///
/// assert_eq!(fnv1a_hex(""), "811c9dc5");
/// assert_eq!(fnv1a_hex("a"), "e40c292c");
/// ```
#[must_use]
pub fn fnv1a_hex(input: &str) -> String {
    let hash = input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    format!("{hash:08x}")
}
