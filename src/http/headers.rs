//! Header block parsing
//!
//! Headers are written into a slice supplied by the caller. The slice is
//! never grown: a header block with more lines than slots is rejected with
//! [`Error::TooManyHeaders`], and the caller decides whether to retry with a
//! larger slice.

use super::chars::{has_ctl_block, is_token, is_value_byte};
use super::parser::ascii;
use super::{complete, Error, Outcome, ParserConfig, Result};
use std::{fmt, mem, str};

/// A header borrowed from the input buffer
///
/// Fields are filled in wire order. Names are not case-normalized and
/// duplicates are kept.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Header name, a non-empty run of token bytes
    pub name: &'a str,

    /// Header value with leading whitespace removed
    ///
    /// May be empty. Values can carry bytes above 0x7F, so they are kept
    /// as raw bytes.
    pub value: &'a [u8],
}

impl Header<'static> {
    /// Unfilled placeholder
    pub const EMPTY: Self = Header {
        name: "",
        value: b"",
    };
}

impl fmt::Debug for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Header");
        f.field("name", &self.name);
        match str::from_utf8(self.value) {
            Ok(value) => f.field("value", &value),
            Err(_) => f.field("value", &self.value),
        };
        f.finish()
    }
}

/// Placeholder for pre-sizing a header array
///
/// ```
/// let headers = [h1scan::http::EMPTY_HEADER; h1scan::http::MAX_HEADERS];
/// assert!(headers.iter().all(|h| h.name.is_empty()));
/// ```
pub const EMPTY_HEADER: Header<'static> = Header::EMPTY;

/// Parse a header block, including its terminating blank line
///
/// On `Complete(len)`, `len` is the number of bytes consumed from `buf` and
/// `headers` is shrunk to the slots that were filled. On `Partial` or an
/// error, slots may already have been overwritten but `headers` keeps its
/// original length.
pub fn parse_headers<'h, 'b>(buf: &'b [u8], headers: &mut &'h mut [Header<'b>]) -> Result<usize> {
    parse_headers_with_config(buf, headers, &ParserConfig::default())
}

/// Parse a header block with an explicit configuration
pub fn parse_headers_with_config<'h, 'b>(
    buf: &'b [u8],
    headers: &mut &'h mut [Header<'b>],
    config: &ParserConfig,
) -> Result<usize> {
    let (len, count) = complete!(scan_headers(buf, headers, config));
    shrink(headers, count);
    Ok(Outcome::Complete(len))
}

/// Fill `headers` from `buf`
///
/// Returns the offset just past the blank line and the number of slots
/// filled. Slots past that count are left untouched.
pub(crate) fn scan_headers<'b>(
    buf: &'b [u8],
    headers: &mut [Header<'b>],
    config: &ParserConfig,
) -> Result<(usize, usize)> {
    let mut pos = 0;
    let mut count = 0;

    loop {
        match buf.get(pos) {
            None => return Ok(Outcome::Partial),
            Some(b'\r') => match buf.get(pos + 1) {
                Some(b'\n') => return Ok(Outcome::Complete((pos + 2, count))),
                Some(_) => return Err(Error::HeaderName),
                None => return Ok(Outcome::Partial),
            },
            Some(b'\n') if config.allow_bare_lf => {
                return Ok(Outcome::Complete((pos + 1, count)));
            }
            Some(b'\n') => return Err(Error::NewLine),
            Some(_) => {}
        }

        let Some(slot) = headers.get_mut(count) else {
            return Err(Error::TooManyHeaders);
        };

        let name_start = pos;
        loop {
            match buf.get(pos) {
                None => return Ok(Outcome::Partial),
                Some(b':') => break,
                Some(&b) if is_token(b) => pos += 1,
                Some(_) => return Err(Error::HeaderName),
            }
        }
        if pos == name_start {
            return Err(Error::HeaderName);
        }
        let name = ascii(&buf[name_start..pos], Error::HeaderName)?;

        // colon, then OWS
        pos += 1;
        loop {
            match buf.get(pos) {
                None => return Ok(Outcome::Partial),
                Some(b' ' | b'\t') => pos += 1,
                Some(_) => break,
            }
        }

        let value_start = pos;
        let (value_end, next) = complete!(scan_value(buf, value_start, config));

        *slot = Header {
            name,
            value: &buf[value_start..value_end],
        };
        count += 1;
        pos = next;
    }
}

/// Scan a header value starting at `pos`
///
/// Returns the offset where the value ends (the CR or LF) and the offset
/// where the next line starts.
fn scan_value(buf: &[u8], pos: usize, config: &ParserConfig) -> Result<(usize, usize)> {
    let mut i = pos;

    loop {
        // skip 8 bytes at a time while none of them needs a closer look
        while let Some(block) = buf.get(i..).and_then(|rest| rest.first_chunk::<8>()) {
            if has_ctl_block(block) {
                break;
            }
            i += 8;
        }

        let Some(&b) = buf.get(i) else {
            return Ok(Outcome::Partial);
        };

        match b {
            b'\r' => {
                return match buf.get(i + 1) {
                    Some(b'\n') => Ok(Outcome::Complete((i, i + 2))),
                    Some(_) => Err(Error::HeaderValue),
                    None => Ok(Outcome::Partial),
                };
            }
            b'\n' if config.allow_bare_lf => return Ok(Outcome::Complete((i, i + 1))),
            _ if is_value_byte(b) => i += 1,
            _ => return Err(Error::HeaderValue),
        }
    }
}

/// Shrink a borrowed header slice to its first `len` slots
pub(crate) fn shrink<'h, 'b>(headers: &mut &'h mut [Header<'b>], len: usize) {
    let all = mem::take(headers);
    let len = len.min(all.len());
    *headers = &mut all[..len];
}
