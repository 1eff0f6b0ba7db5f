use anyhow::Result;
use clap::Parser;
use log::info;

use nsg_rotate::cli::{Cli, Commands};
use nsg_rotate::cli::commands::{auth_command, rotate_command, show_command};
use nsg_rotate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting nsg-rotate");

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rotate(args) => rotate_command(config, args).await,
        Commands::Show => show_command(config).await,
        Commands::Auth(args) => auth_command(config, args).await,
    }
}
