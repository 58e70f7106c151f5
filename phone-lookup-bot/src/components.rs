//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};
use twilio_lookup::{LookupService, TwilioLookupClient};

use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler, LookupHandler};
use crate::i18n::Locale;
use crate::telegram::TelegramBotAdapter;

/// Everything the REPL needs; produced once at startup.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    /// Bot used to send replies (the Telegram adapter in production).
    pub reply_bot: Arc<dyn bot_core::Bot>,
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub lookup_service: Arc<dyn LookupService>,
    pub locale: Locale,
}

/// Builds a teloxide Bot, pointing it at `api_url` when given.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Bot {
    let bot = Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let reply_bot: Arc<dyn bot_core::Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let lookup_service: Arc<dyn LookupService> =
        Arc::new(TwilioLookupClient::new(config.lookup().clone()).map_err(|e| {
            error!(error = %e, "Failed to build Twilio lookup client");
            anyhow::anyhow!("Failed to build Twilio lookup client: {}", e)
        })?);

    info!(
        bot_token = %config.masked_bot_token(),
        locale = %config.locale(),
        "Bot components ready"
    );

    Ok(BotComponents {
        teloxide_bot,
        reply_bot,
        bot_username: Arc::new(RwLock::new(None)),
        lookup_service,
        locale: config.locale(),
    })
}

/// Builds the handler chain (logging → commands → lookup).
pub fn build_handler_chain(
    lookup_service: Arc<dyn LookupService>,
    locale: Locale,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(locale, bot_username)))
        .add_handler(Arc::new(LookupHandler::new(lookup_service, locale)))
}
