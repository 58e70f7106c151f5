//! Handlers for the lookup chain: logging, bot commands, phone number lookup.

mod command_handler;
mod logging_handler;
mod lookup_handler;

pub use command_handler::{parse_command, BotCommand, CommandHandler};
pub use logging_handler::LoggingHandler;
pub use lookup_handler::LookupHandler;
