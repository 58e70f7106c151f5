//! `/start` and `/help`. Other slash commands end the chain without a reply.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::i18n::Locale;
use crate::presenter::{help_text, start_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    /// Any other `/name`, or a command addressed to a different bot.
    Other(String),
}

/// Parses the leading `/command[@bot]` of `text`. Returns None for plain text.
///
/// A `@target` suffix that does not match `bot_username` yields [`BotCommand::Other`].
/// Command names are case-insensitive.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<BotCommand> {
    let first = text.trim_start().split_whitespace().next()?;
    let body = first.strip_prefix('/')?;
    let (name, target) = match body.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (body, None),
    };

    if let (Some(target), Some(me)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(me) {
            return Some(BotCommand::Other(body.to_string()));
        }
    }

    Some(match name.to_ascii_lowercase().as_str() {
        "start" => BotCommand::Start,
        "help" => BotCommand::Help,
        _ => BotCommand::Other(name.to_string()),
    })
}

/// Answers `/start` and `/help` with static text; lets non-command text through.
pub struct CommandHandler {
    locale: Locale,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(locale: Locale, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            locale,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Ignore);
        }
        let username = self.bot_username.read().await.clone();
        let Some(command) = parse_command(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(user_id = message.user.id, command = ?command, "Bot command");
        Ok(match command {
            BotCommand::Start => HandlerResponse::Reply(start_text(self.locale).to_string()),
            BotCommand::Help => HandlerResponse::Reply(help_text(self.locale).to_string()),
            BotCommand::Other(_) => HandlerResponse::Stop,
        })
    }
}
