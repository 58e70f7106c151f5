//! Bot configuration: BaseConfig (Telegram + log) + LookupConfig (Twilio) + locale. Loaded from env.

mod base;
mod bot_config;
mod lookup;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use lookup::{load_locale, load_lookup_config};

use std::env;

/// Reads an env var, treating unset and blank the same.
pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
