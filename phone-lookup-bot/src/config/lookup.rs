//! Twilio Lookup and locale settings from env.

use std::time::Duration;

use anyhow::{Context, Result};
use twilio_lookup::{LookupConfig, DEFAULT_TIMEOUT_SECS};

use super::non_empty_var;
use crate::i18n::Locale;

/// Loads TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN (required) plus optional TWILIO_LOOKUP_URL,
/// TWILIO_LOOKUP_FIELDS and LOOKUP_TIMEOUT_SECS.
pub fn load_lookup_config() -> Result<LookupConfig> {
    let sid = non_empty_var("TWILIO_ACCOUNT_SID");
    let token = non_empty_var("TWILIO_AUTH_TOKEN");
    let (sid, token) = match (sid, token) {
        (Some(sid), Some(token)) => (sid, token),
        (sid, token) => {
            let missing: Vec<&str> = [
                sid.is_none().then_some("TWILIO_ACCOUNT_SID"),
                token.is_none().then_some("TWILIO_AUTH_TOKEN"),
            ]
            .into_iter()
            .flatten()
            .collect();
            anyhow::bail!("Missing required environment variables: {}", missing.join(", "));
        }
    };
    lookup_config_with_credentials(sid, token)
}

pub(crate) fn lookup_config_with_credentials(sid: String, token: String) -> Result<LookupConfig> {
    let mut config = LookupConfig::new(sid, token);
    if let Some(url) = non_empty_var("TWILIO_LOOKUP_URL") {
        config = config.with_base_url(url);
    }
    if let Some(fields) = non_empty_var("TWILIO_LOOKUP_FIELDS") {
        config = config.with_fields(fields);
    }
    let timeout_secs = match non_empty_var("LOOKUP_TIMEOUT_SECS") {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("LOOKUP_TIMEOUT_SECS is not a number: {}", raw))?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    if timeout_secs == 0 {
        anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than 0");
    }
    Ok(config.with_timeout(Duration::from_secs(timeout_secs)))
}

/// BOT_LOCALE (`ar` or `en`); default Arabic.
pub fn load_locale() -> Result<Locale> {
    match non_empty_var("BOT_LOCALE") {
        Some(raw) => Ok(raw.parse::<Locale>()?),
        None => Ok(Locale::default()),
    }
}
