//! h1scan - zero-copy HTTP/1.x start line and header parser
//!
//! This crate locates and validates the request line, status line and
//! header block of an HTTP/1.0 or HTTP/1.1 message. Every parsed field is a
//! view into the caller's buffer; nothing is copied and nothing is allocated.

pub mod http;
