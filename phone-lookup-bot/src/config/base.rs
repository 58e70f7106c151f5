//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;

use super::non_empty_var;

pub const DEFAULT_LOG_FILE: &str = "logs/phone-lookup-bot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = Self::token_from(token).ok_or_else(|| {
            anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set")
        })?;
        Ok(Self::with_token(bot_token))
    }

    /// Token from the override, TELEGRAM_BOT_TOKEN, or BOT_TOKEN, in that order.
    pub(crate) fn token_from(token: Option<String>) -> Option<String> {
        token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| non_empty_var("TELEGRAM_BOT_TOKEN"))
            .or_else(|| non_empty_var("BOT_TOKEN"))
    }

    /// Uses the given token; other fields from env.
    pub(crate) fn with_token(bot_token: String) -> Self {
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Self {
            bot_token,
            telegram_api_url,
            log_file,
        }
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
