//! Binary for the phone lookup Telegram bot.

use anyhow::Result;
use clap::Parser;
use phone_lookup_bot::{load_config, load_locale, load_lookup_config, run_bot, run_lookup_once, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Lookup { number } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let lookup = load_lookup_config()?;
            let locale = load_locale()?;
            let text = run_lookup_once(lookup, locale, &number).await?;
            println!("{}", text);
            Ok(())
        }
    }
}
