//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::error;

pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "Failed to send message");
                BotError::Bot(e.to_string())
            })?;
        Ok(())
    }
}
