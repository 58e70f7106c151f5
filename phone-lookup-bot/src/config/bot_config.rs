//! BotConfig: BaseConfig + LookupConfig + Locale. Use load() for env-based loading.

use anyhow::Result;
use twilio_lookup::{mask_token, LookupConfig};

use super::lookup::{lookup_config_with_credentials, load_locale};
use super::{non_empty_var, BaseConfig};
use crate::i18n::Locale;

/// Full process config. Loaded once at startup, then only read.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub lookup: LookupConfig,
    pub locale: Locale,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides
    /// TELEGRAM_BOT_TOKEN / BOT_TOKEN. Fails listing every missing credential.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = BaseConfig::token_from(token);
        let sid = non_empty_var("TWILIO_ACCOUNT_SID");
        let auth_token = non_empty_var("TWILIO_AUTH_TOKEN");

        let (bot_token, sid, auth_token) = match (bot_token, sid, auth_token) {
            (Some(b), Some(s), Some(a)) => (b, s, a),
            (b, s, a) => {
                let missing: Vec<&str> = [
                    b.is_none().then_some("TELEGRAM_BOT_TOKEN"),
                    s.is_none().then_some("TWILIO_ACCOUNT_SID"),
                    a.is_none().then_some("TWILIO_AUTH_TOKEN"),
                ]
                .into_iter()
                .flatten()
                .collect();
                anyhow::bail!("Missing required environment variables: {}", missing.join(", "));
            }
        };

        let base = BaseConfig::with_token(bot_token);
        let lookup = lookup_config_with_credentials(sid, auth_token)?;
        let locale = load_locale()?;
        Ok(Self {
            base,
            lookup,
            locale,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if reqwest::Url::parse(&self.lookup.base_url).is_err() {
            anyhow::bail!(
                "TWILIO_LOOKUP_URL is not a valid URL: {}",
                self.lookup.base_url
            );
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn lookup(&self) -> &LookupConfig {
        &self.lookup
    }
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Bot token masked for logs.
    pub fn masked_bot_token(&self) -> String {
        mask_token(&self.base.bot_token)
    }
}
