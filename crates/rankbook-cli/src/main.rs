mod cli;
mod commands;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use settings::{FileSettings, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rankbook_cli=warn,rankbook=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::resolve(&args, FileSettings::load()?)?;

    match args.command {
        Command::Add {
            region,
            riot_id,
            username,
            password,
        } => commands::add::run(&settings, region, &riot_id, &username, &password),
        Command::Resync => commands::resync::run(&settings),
        Command::Show {
            region,
            output,
            reveal,
            format,
        } => commands::show::run(&settings, region, output.as_deref(), reveal, format),
    }
}
