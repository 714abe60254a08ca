// src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wd_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenv::dotenv(); // absent .env is fine

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wd_scrape=info")),
        )
        .init();

    let cli = Cli::parse();
    cli::run(&cli)?;
    Ok(())
}
