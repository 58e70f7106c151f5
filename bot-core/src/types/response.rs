//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the response body; the runner sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and reply with this text.
    Reply(String),
}
