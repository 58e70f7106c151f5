//! REPL runner: converts teloxide messages to bot-core messages and dispatches each one on its own task.

use std::sync::Arc;

use anyhow::Result;
use bot_core::{Bot as CoreBot, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::runner::dispatch;

/// Calls get_me() to fill `bot_username`, then runs the long-polling REPL until shutdown.
/// teloxide runs chats concurrently and each chat's updates in order, so replies in a chat keep the order of its messages.
#[instrument(skip(bot, reply_bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    reply_bot: Arc<dyn CoreBot>,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands addressed with @username are not checked"),
    }

    info!("Bot started successfully");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let reply_bot = reply_bot.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if let Err(e) = dispatch(&chain, reply_bot.as_ref(), &core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Failed to handle message"
                );
            }

            respond(())
        }
    })
    .await;

    info!("Bot stopped");
    Ok(())
}
