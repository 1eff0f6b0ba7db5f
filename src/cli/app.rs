use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::auth::AuthCommands;
use super::commands::rotate::RotateArgs;

#[derive(Parser)]
#[command(name = "nsg-rotate")]
#[command(about = "Rotate a dynamic IP address in Azure NSG security rules")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the dynamic IP in every configured security rule
    Rotate(RotateArgs),
    /// Show the current source address prefixes of the configured rules
    Show,
    /// Authentication management
    Auth(AuthCommands),
}
