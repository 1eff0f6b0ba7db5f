//! Authentication command handlers

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::time::SystemTime;

use crate::api::AuthClient;
use crate::config::Config;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Acquire a token with the configured credentials and report the result
    Test,
}

pub async fn auth_command(config: Config, args: AuthCommands) -> Result<()> {
    match args.command {
        AuthSubcommands::Test => test_command(config).await,
    }
}

async fn test_command(config: Config) -> Result<()> {
    println!(
        "Authenticating to tenant {} with client_id {}",
        config.credentials.tenant_id.cyan(),
        config.credentials.client_id.cyan()
    );

    let auth = AuthClient::new();
    let token = auth.acquire_token(&config.credentials).await?;

    let validity = token
        .expires_at
        .duration_since(SystemTime::now())
        .unwrap_or_default();

    println!("{}", "Token obtained successfully".bright_green());
    println!("Token valid for {} seconds", validity.as_secs());

    Ok(())
}
