//! HTTP/1.x message head parsing
//!
//! This module parses the framing of an HTTP/1.x message: the request line or
//! status line, and the header block that follows it. The parser is
//! stateless across calls. When the buffer ends before a verdict can be
//! reached the result is [`Outcome::Partial`], and the caller retries the
//! whole parse once more bytes have arrived.
//!
//! # Architecture
//!
//! Parsing is split into small scanners that each recognize one piece of
//! grammar and report an [`Outcome`]:
//!
//! - `chars` classifies single bytes (token characters, value characters)
//! - `parser` holds the line terminator, token, version, status code and
//!   reason phrase scanners
//! - `headers` fills a caller-supplied, fixed-capacity header slice
//! - `message` sequences the scanners into [`Request`] and [`Response`]
//!
//! # Examples
//!
//! ```
//! use h1scan::http::{Outcome, Request, EMPTY_HEADER};
//!
//! let mut headers = [EMPTY_HEADER; 4];
//! let mut req = Request::new(&mut headers);
//!
//! let buf = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! assert_eq!(req.parse(buf), Ok(Outcome::Complete(buf.len())));
//! assert_eq!(req.method, Some("GET"));
//! assert_eq!(req.path, Some("/index.html"));
//! assert_eq!(req.headers.len(), 1);
//! assert_eq!(req.headers[0].name, "Host");
//! ```

/// Unwrap a `Complete` value or return `Partial` from the enclosing function.
macro_rules! complete {
    ($e:expr) => {
        match $e? {
            $crate::http::Outcome::Complete(value) => value,
            $crate::http::Outcome::Partial => return Ok($crate::http::Outcome::Partial),
        }
    };
}

pub(crate) use complete;

pub mod chars;
pub mod config;
pub mod headers;
pub mod message;
pub mod parser;

pub use config::ParserConfig;
pub use headers::{parse_headers, parse_headers_with_config, Header, EMPTY_HEADER};
pub use message::{Request, Response};
pub use parser::{newline, parse_reason, parse_status_code, parse_token, parse_version};

/// Result type for parse operations
///
/// `Ok(Outcome::Partial)` means the input is a valid prefix but incomplete.
/// `Err` means the input can never become valid by appending more bytes.
pub type Result<T> = std::result::Result<Outcome<T>, Error>;

/// Grammar violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Method or path contains a byte outside the token class
    #[error("invalid token")]
    Token,

    /// Status code has a non-digit, or reason phrase has a control byte
    #[error("invalid status line")]
    Status,

    /// Missing or malformed line terminator
    #[error("invalid new line")]
    NewLine,

    /// Version is not `HTTP/1.0` or `HTTP/1.1`
    #[error("invalid HTTP version")]
    HttpVersion,

    /// Header block does not fit the supplied header slice
    #[error("too many headers")]
    TooManyHeaders,

    /// Header name is empty or contains a non-token byte
    #[error("invalid header name")]
    HeaderName,

    /// Header value contains a control byte or a lone CR
    #[error("invalid header value")]
    HeaderValue,
}

/// Progress of a successful scan
///
/// `Complete` carries the scanner's result, usually a byte offset relative to
/// the slice that was scanned. `Partial` means more input is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The grammar element was fully recognized
    Complete(T),
    /// The buffer ended before a verdict was possible
    Partial,
}

impl<T> Outcome<T> {
    /// Check if this outcome is complete
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Outcome::Complete(_))
    }

    /// Check if this outcome is partial
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, Outcome::Partial)
    }

    /// Get the completed value, if any
    #[inline]
    pub fn complete(self) -> Option<T> {
        match self {
            Outcome::Complete(value) => Some(value),
            Outcome::Partial => None,
        }
    }

    /// Map the completed value
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Complete(value) => Outcome::Complete(f(value)),
            Outcome::Partial => Outcome::Partial,
        }
    }
}

/// Recommended header slice capacity per message
pub const MAX_HEADERS: usize = 64;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        let done: Outcome<usize> = Outcome::Complete(7);
        assert!(done.is_complete());
        assert!(!done.is_partial());
        assert_eq!(done.complete(), Some(7));
        assert_eq!(done.map(|n| n + 1), Outcome::Complete(8));

        let partial: Outcome<usize> = Outcome::Partial;
        assert!(partial.is_partial());
        assert_eq!(partial.complete(), None);
        assert_eq!(partial.map(|n| n + 1), Outcome::Partial);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Token.to_string(), "invalid token");
        assert_eq!(Error::TooManyHeaders.to_string(), "too many headers");
        assert_eq!(Error::HeaderValue.to_string(), "invalid header value");
    }
}
