use std::sync::Arc;

use anyhow::{Context, Result};
use bot_core::{init_tracing, Bot, HandlerResponse, Message};
use handler_chain::HandlerChain;
use tracing::{info, instrument};
use twilio_lookup::{LookupConfig, LookupService, TwilioLookupClient};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::i18n::Locale;
use crate::pipeline::resolve;
use crate::presenter::render_outcome;
use crate::telegram::run_repl;

/// Runs one message through the chain and sends the reply, if any, to the message's chat.
/// Returns the text that was sent.
#[instrument(skip(chain, bot, message), fields(chat_id = message.chat.id, message_id = %message.id))]
pub async fn dispatch(
    chain: &HandlerChain,
    bot: &dyn Bot,
    message: &Message,
) -> bot_core::Result<Option<String>> {
    match chain.handle(message).await? {
        HandlerResponse::Reply(text) => {
            bot.reply_to(message, &text).await?;
            info!(reply_len = text.chars().count(), "Reply sent");
            Ok(Some(text))
        }
        _ => Ok(None),
    }
}

/// Main entry: validate config, init logging, build components, then run the REPL until shutdown.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        lookup_url = %config.lookup().base_url,
        fields = %config.lookup().fields,
        locale = %config.locale(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let chain = build_handler_chain(
        components.lookup_service.clone(),
        components.locale,
        components.bot_username.clone(),
    );

    run_repl(
        components.teloxide_bot,
        components.reply_bot,
        chain,
        components.bot_username,
    )
    .await
}

/// One lookup outside Telegram; returns the text the bot would reply with.
pub async fn run_lookup_once(config: LookupConfig, locale: Locale, raw: &str) -> Result<String> {
    if reqwest::Url::parse(&config.base_url).is_err() {
        anyhow::bail!("TWILIO_LOOKUP_URL is not a valid URL: {}", config.base_url);
    }
    let client: Arc<dyn LookupService> = Arc::new(
        TwilioLookupClient::new(config).context("Failed to build Twilio lookup client")?,
    );
    let outcome = resolve(client.as_ref(), raw).await;
    Ok(render_outcome(&outcome, locale))
}
