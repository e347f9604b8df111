//! Start line scanners
//!
//! Each scanner looks at the slice it is given, starting at offset 0, and
//! reports where the recognized element ends. Offsets in `Complete` are
//! relative to that slice. None of them allocate or keep state; running out
//! of bytes before a verdict is always `Partial`, never a panic.

use super::chars::{is_reason_byte, is_token};
use super::{Error, Outcome, Result};

const VERSION_PREFIX: &[u8; 7] = b"HTTP/1.";

/// Length of `HTTP/1.x`
pub(crate) const VERSION_LEN: usize = 8;

/// Length of a status code
pub(crate) const STATUS_CODE_LEN: usize = 3;

/// Find the first line terminator
///
/// A bare LF at `i` yields `Complete(i)`, and so does a CRLF pair whose CR
/// is at `i`. A CR followed by anything other than LF is an error, and a CR
/// as the last available byte is `Partial`.
///
/// An empty slice is `Partial`. A non-empty slice without any CR or LF is
/// `Error::NewLine`.
pub fn newline(buf: &[u8]) -> Result<usize> {
    if buf.is_empty() {
        return Ok(Outcome::Partial);
    }

    for (i, &b) in buf.iter().enumerate() {
        match b {
            b'\n' => return Ok(Outcome::Complete(i)),
            b'\r' => {
                return match buf.get(i + 1) {
                    Some(b'\n') => Ok(Outcome::Complete(i)),
                    Some(_) => Err(Error::NewLine),
                    None => Ok(Outcome::Partial),
                };
            }
            _ => {}
        }
    }

    Err(Error::NewLine)
}

/// Scan a token such as a method or a request target
///
/// The token ends at the first SP, CR or LF, whose offset is returned; the
/// token itself is `buf[..offset]`, which may be empty.
pub fn parse_token(buf: &[u8]) -> Result<usize> {
    for (i, &b) in buf.iter().enumerate() {
        match b {
            b' ' | b'\r' | b'\n' => return Ok(Outcome::Complete(i)),
            _ if is_token(b) => {}
            _ => return Err(Error::Token),
        }
    }

    Ok(Outcome::Partial)
}

/// Match `HTTP/1.1` or `HTTP/1.0` at the start of the slice
///
/// Returns `Complete(7)`, the offset of the minor version digit. A mismatch
/// in the bytes available so far is reported immediately, even if the slice
/// is shorter than the version literal.
pub fn parse_version(buf: &[u8]) -> Result<usize> {
    for (i, &b) in buf.iter().take(VERSION_LEN).enumerate() {
        let valid = match VERSION_PREFIX.get(i) {
            Some(&expected) => b == expected,
            None => b == b'0' || b == b'1',
        };

        if !valid {
            return Err(Error::HttpVersion);
        }
    }

    if buf.len() < VERSION_LEN {
        Ok(Outcome::Partial)
    } else {
        Ok(Outcome::Complete(VERSION_LEN - 1))
    }
}

/// Parse a three digit status code
///
/// Only the first three bytes are examined. The code always spans offsets
/// `0..=2`, so instead of the fixed end offset 2, `Complete` carries the
/// numeric value; callers advance by three bytes.
/// Range validation (100-599) is left to the caller.
pub fn parse_status_code(buf: &[u8]) -> Result<u16> {
    let mut code = 0u16;

    for &b in buf.iter().take(STATUS_CODE_LEN) {
        if !b.is_ascii_digit() {
            return Err(Error::Status);
        }
        code = code * 10 + u16::from(b - b'0');
    }

    if buf.len() < STATUS_CODE_LEN {
        Ok(Outcome::Partial)
    } else {
        Ok(Outcome::Complete(code))
    }
}

/// Scan a reason phrase up to its line terminator
///
/// Returns the offset of the terminating CR or LF. HTAB and visible ASCII
/// are accepted; any other byte is `Error::Status`.
pub fn parse_reason(buf: &[u8]) -> Result<usize> {
    for (i, &b) in buf.iter().enumerate() {
        match b {
            b'\r' | b'\n' => return Ok(Outcome::Complete(i)),
            _ if is_reason_byte(b) => {}
            _ => return Err(Error::Status),
        }
    }

    Ok(Outcome::Partial)
}

/// View already validated ASCII as `str`
#[inline]
pub(crate) fn ascii(bytes: &[u8], err: Error) -> std::result::Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|_| err)
}
