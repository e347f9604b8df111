//! Byte classification
//!
//! The token class used here is deliberately loose: any printable US-ASCII
//! byte except DEL. RFC 7230 `tchar` additionally excludes delimiters such as
//! `"`, `(`, `,` and SP, which this parser does not separate out.

const BLOCK: usize = 8;
const LSB: u64 = u64::from_ne_bytes([0x01; BLOCK]);
const MSB: u64 = u64::from_ne_bytes([0x80; BLOCK]);
const SPACE: u64 = u64::from_ne_bytes([b' '; BLOCK]);
const DEL: u64 = u64::from_ne_bytes([0x7f; BLOCK]);

/// Check if a byte is a (loose) token character: `0x20..=0x7E`
#[inline]
pub fn is_token(b: u8) -> bool {
    b > 0x1f && b < 0x7f
}

/// Check if a byte is a control character other than HTAB
#[inline]
pub fn is_ctl(b: u8) -> bool {
    (b < 0x20 && b != b'\t') || b == 0x7f
}

/// Check if a byte may appear in a reason phrase: HTAB or visible ASCII
#[inline]
pub fn is_reason_byte(b: u8) -> bool {
    b == b'\t' || is_token(b)
}

/// Check if a byte may appear in a header value
///
/// High bytes (`0x80..=0xFF`) are passed through as value content.
#[inline]
pub fn is_value_byte(b: u8) -> bool {
    !is_ctl(b)
}

/// Check if an 8-byte block contains a byte below SP or a DEL
///
/// Used by the header value fast path: a block without either can be
/// skipped whole. HTAB also trips this probe and is left to the byte loop.
#[inline]
pub(crate) fn has_ctl_block(block: &[u8; BLOCK]) -> bool {
    let word = u64::from_ne_bytes(*block);

    // bytes < 0x20
    let below_space = word.wrapping_sub(SPACE) & !word & MSB;

    // bytes == 0x7f
    let del = word ^ DEL;
    let is_del = del.wrapping_sub(LSB) & !del & MSB;

    (below_space | is_del) != 0
}
