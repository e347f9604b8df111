//! Parser configuration
//!
//! The defaults accept what real peers commonly send. Stricter settings
//! reject the lenient forms outright.

/// Grammar leniency switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept a bare LF as a line terminator (default: true)
    pub allow_bare_lf: bool,

    /// Accept a status line without SP and reason phrase,
    /// e.g. `HTTP/1.1 200\r\n` (default: true)
    pub allow_missing_reason: bool,
}

impl ParserConfig {
    /// Create the default configuration
    pub const fn new() -> Self {
        ParserConfig {
            allow_bare_lf: true,
            allow_missing_reason: true,
        }
    }

    /// Create a configuration that only accepts the strict RFC forms
    pub const fn strict() -> Self {
        ParserConfig {
            allow_bare_lf: false,
            allow_missing_reason: false,
        }
    }

    /// Set whether a bare LF terminates a line
    pub fn allow_bare_lf(mut self, value: bool) -> Self {
        self.allow_bare_lf = value;
        self
    }

    /// Set whether the reason phrase may be omitted entirely
    pub fn allow_missing_reason(mut self, value: bool) -> Self {
        self.allow_missing_reason = value;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
