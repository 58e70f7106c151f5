//! # Phone lookup bot
//!
//! Telegram bot that takes a phone number in international format, normalizes it to E.164,
//! queries Twilio Lookup v2 and replies with country, caller name, carrier and line type.
//! Wires bot-core, handler-chain and twilio-lookup; loads config from env and runs the REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod i18n;
pub mod pipeline;
pub mod presenter;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, build_teloxide_bot, BotComponents};
pub use config::{load_locale, load_lookup_config, BaseConfig, BotConfig};
pub use handlers::{parse_command, BotCommand, CommandHandler, LoggingHandler, LookupHandler};
pub use i18n::{Locale, Messages, UnknownLocale};
pub use pipeline::{resolve, LookupOutcome};
pub use presenter::{render_lookup_error, render_outcome, render_result};
pub use runner::{dispatch, run_bot, run_lookup_once};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
