//! HTTP message heads
//!
//! [`Request`] and [`Response`] run the start line scanners in wire order,
//! then the header block scanner over the remainder. The first `Partial` or
//! error stops the parse and is returned as is.
//!
//! The parse is stateless: after `Partial`, call `parse` again with the
//! grown buffer and it starts over from offset 0. Fields are only set once
//! the whole head is `Complete`; the header slots, however, are written in
//! place while scanning, so use fresh storage for every attempt you intend
//! to inspect.

use log::{debug, trace};

use super::headers::{scan_headers, shrink};
use super::parser::{
    ascii, newline, parse_reason, parse_status_code, parse_token, parse_version, STATUS_CODE_LEN,
    VERSION_LEN,
};
use super::{complete, Error, Header, Outcome, ParserConfig, Result};

/// A parsed request head
///
/// # Examples
///
/// ```
/// use h1scan::http::{Outcome, Request, EMPTY_HEADER};
///
/// let mut headers = [EMPTY_HEADER; 16];
/// let mut req = Request::new(&mut headers);
///
/// assert_eq!(req.parse(b"GET /404 HTTP/1.1\r\nHost:"), Ok(Outcome::Partial));
/// assert_eq!(req.method, None);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Request<'h, 'b> {
    /// Request method, such as `GET`
    pub method: Option<&'b str>,
    /// Request target, such as `/index.html`
    pub path: Option<&'b str>,
    /// Protocol version, `HTTP/1.0` or `HTTP/1.1`
    pub version: Option<&'b str>,
    /// Header slots; shrunk to the filled headers once parsing completes
    pub headers: &'h mut [Header<'b>],
}

impl<'h, 'b> Request<'h, 'b> {
    /// Create a new request using caller-owned header storage
    pub fn new(headers: &'h mut [Header<'b>]) -> Self {
        Request {
            method: None,
            path: None,
            version: None,
            headers,
        }
    }

    /// Parse a request head with the default configuration
    ///
    /// Returns `Complete(len)` with the length of the head, including the
    /// blank line; the body, if any, starts at `buf[len..]`.
    pub fn parse(&mut self, buf: &'b [u8]) -> Result<usize> {
        self.parse_with_config(buf, &ParserConfig::default())
    }

    /// Parse a request head with an explicit configuration
    pub fn parse_with_config(&mut self, buf: &'b [u8], config: &ParserConfig) -> Result<usize> {
        let result = self.parse_head(buf, config);
        match &result {
            Ok(Outcome::Complete(len)) => {
                trace!("request head complete: {} bytes, {} headers", len, self.headers.len())
            }
            Ok(Outcome::Partial) => trace!("request head partial after {} bytes", buf.len()),
            Err(err) => debug!("rejected request head: {}", err),
        }
        result
    }

    fn parse_head(&mut self, buf: &'b [u8], config: &ParserConfig) -> Result<usize> {
        let method_end = complete!(parse_token(buf));
        let method = token_before_space(buf, 0, method_end)?;

        let path_start = method_end + 1;
        let path_end = path_start + complete!(parse_token(rest(buf, path_start)));
        let path = token_before_space(buf, path_start, path_end)?;

        let version_start = path_end + 1;
        let version_end = version_start + complete!(parse_version(rest(buf, version_start))) + 1;
        let version = ascii(&buf[version_start..version_end], Error::HttpVersion)?;

        let headers_start = version_end + complete!(line_end(rest(buf, version_end), config));
        let (headers_len, count) =
            complete!(scan_headers(rest(buf, headers_start), self.headers, config));

        self.method = Some(method);
        self.path = Some(path);
        self.version = Some(version);
        shrink(&mut self.headers, count);

        Ok(Outcome::Complete(headers_start + headers_len))
    }

    /// Minor version digit, once parsing completed
    pub fn minor_version(&self) -> Option<u8> {
        minor_version(self.version)
    }
}

/// A parsed response head
///
/// # Examples
///
/// ```
/// use h1scan::http::{Outcome, Response, EMPTY_HEADER};
///
/// let mut headers = [EMPTY_HEADER; 16];
/// let mut res = Response::new(&mut headers);
///
/// let buf = b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n";
/// assert_eq!(res.parse(buf), Ok(Outcome::Complete(buf.len())));
/// assert_eq!(res.status_code, Some(404));
/// assert_eq!(res.reason, Some("Not Found"));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Response<'h, 'b> {
    /// Protocol version, `HTTP/1.0` or `HTTP/1.1`
    pub version: Option<&'b str>,
    /// Three digit status code; not range checked
    pub status_code: Option<u16>,
    /// Reason phrase, possibly empty
    pub reason: Option<&'b str>,
    /// Header slots; shrunk to the filled headers once parsing completes
    pub headers: &'h mut [Header<'b>],
}

impl<'h, 'b> Response<'h, 'b> {
    /// Create a new response using caller-owned header storage
    pub fn new(headers: &'h mut [Header<'b>]) -> Self {
        Response {
            version: None,
            status_code: None,
            reason: None,
            headers,
        }
    }

    /// Parse a response head with the default configuration
    pub fn parse(&mut self, buf: &'b [u8]) -> Result<usize> {
        self.parse_with_config(buf, &ParserConfig::default())
    }

    /// Parse a response head with an explicit configuration
    pub fn parse_with_config(&mut self, buf: &'b [u8], config: &ParserConfig) -> Result<usize> {
        let result = self.parse_head(buf, config);
        match &result {
            Ok(Outcome::Complete(len)) => {
                trace!("response head complete: {} bytes, {} headers", len, self.headers.len())
            }
            Ok(Outcome::Partial) => trace!("response head partial after {} bytes", buf.len()),
            Err(err) => debug!("rejected response head: {}", err),
        }
        result
    }

    fn parse_head(&mut self, buf: &'b [u8], config: &ParserConfig) -> Result<usize> {
        let version_end = complete!(parse_version(buf)) + 1;
        let version = ascii(&buf[..version_end], Error::HttpVersion)?;

        match buf.get(version_end) {
            Some(b' ') => {}
            Some(_) => return Err(Error::HttpVersion),
            None => return Ok(Outcome::Partial),
        }

        let code_start = version_end + 1;
        let status_code = complete!(parse_status_code(rest(buf, code_start)));
        let code_end = code_start + STATUS_CODE_LEN;

        let (reason_start, reason_end) = match buf.get(code_end) {
            Some(b' ') => {
                let start = code_end + 1;
                (start, start + complete!(parse_reason(rest(buf, start))))
            }
            Some(b'\r' | b'\n') if config.allow_missing_reason => (code_end, code_end),
            Some(_) => return Err(Error::Status),
            None => return Ok(Outcome::Partial),
        };
        let reason = ascii(&buf[reason_start..reason_end], Error::Status)?;

        let headers_start = reason_end + complete!(line_end(rest(buf, reason_end), config));
        let (headers_len, count) =
            complete!(scan_headers(rest(buf, headers_start), self.headers, config));

        self.version = Some(version);
        self.status_code = Some(status_code);
        self.reason = Some(reason);
        shrink(&mut self.headers, count);

        Ok(Outcome::Complete(headers_start + headers_len))
    }

    /// Minor version digit, once parsing completed
    pub fn minor_version(&self) -> Option<u8> {
        minor_version(self.version)
    }
}

/// The bytes of `buf` from `at` on, empty when `at` is past the end
#[inline]
fn rest(buf: &[u8], at: usize) -> &[u8] {
    buf.get(at..).unwrap_or_default()
}

/// Take `buf[start..end]` as a request line token that must be followed by SP
fn token_before_space(buf: &[u8], start: usize, end: usize) -> std::result::Result<&str, Error> {
    if end == start || buf.get(end) != Some(&b' ') {
        return Err(Error::Token);
    }
    ascii(&buf[start..end], Error::Token)
}

/// Match the line terminator that must start at offset 0
///
/// Returns the number of bytes it spans.
fn line_end(buf: &[u8], config: &ParserConfig) -> Result<usize> {
    match buf.first() {
        None => return Ok(Outcome::Partial),
        Some(b'\r' | b'\n') => {}
        Some(_) => return Err(Error::NewLine),
    }

    if complete!(newline(buf.get(..2).unwrap_or(buf))) != 0 {
        return Err(Error::NewLine);
    }

    match buf.first() {
        Some(b'\r') => Ok(Outcome::Complete(2)),
        _ if config.allow_bare_lf => Ok(Outcome::Complete(1)),
        _ => Err(Error::NewLine),
    }
}

fn minor_version(version: Option<&str>) -> Option<u8> {
    let digit = *version?.as_bytes().get(VERSION_LEN - 1)?;
    char::from(digit).to_digit(10).map(|d| d as u8)
}
