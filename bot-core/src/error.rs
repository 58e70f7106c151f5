//! Error type for the bot core.

use thiserror::Error;

/// Errors surfaced by the transport when delivering a reply.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
