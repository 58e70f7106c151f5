//! Lookup errors. A 404 is not an error; it is [`crate::LookupResult::NotFound`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Non-2xx other than 404. `body` is already truncated to [`crate::BODY_SNIPPET_LIMIT`] chars.
    #[error("lookup service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("lookup request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Connection refused, DNS failure, TLS or other transport problems.
    #[error("lookup request failed: {0}")]
    Transport(String),

    #[error("invalid lookup response: {0}")]
    Decode(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl LookupError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout { .. })
    }
}

/// First `limit` chars of `s` (char-boundary safe).
pub fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
