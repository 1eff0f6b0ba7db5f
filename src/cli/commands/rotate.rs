//! Rotate command handler

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use crate::api::{ArmClient, ArmSession};
use crate::config::Config;
use crate::rotate::{extract_dynamic_ip, replace_ip};

#[derive(Args)]
pub struct RotateArgs {
    /// New dynamic IP (overrides the configured value)
    #[arg(long = "ip", help = "New dynamic IP, overrides the configured value")]
    pub ip: Option<String>,

    /// Read and report without writing anything
    #[arg(long, help = "Read and report without writing anything")]
    pub dry_run: bool,
}

/// Handle the rotate command.
///
/// Rules are processed strictly one after another; the first failure
/// aborts the run and leaves the remaining rules untouched.
pub async fn rotate_command(config: Config, args: RotateArgs) -> Result<()> {
    let new_ip = args
        .ip
        .or_else(|| config.new_ip.clone())
        .context("No new IP configured (use --ip, NSG_ROTATE_NEW_IP or [rotation] new_ip)")?;

    let client = ArmClient::new();
    let mut session = ArmSession::new(config.credentials.clone());

    for rule_name in &config.rule_names {
        let token = session.token().await?;

        let rule = client
            .get_rule(&config.target, rule_name, &token)
            .await
            .with_context(|| format!("Failed to read security rule '{}'", rule_name))?;

        let current = &rule.properties.source_address_prefixes;
        println!("Retrieved rule {}", rule_name.bright_green().bold());
        println!(
            "Source IP addresses currently allowed in {}: {:?}",
            rule_name, current
        );

        let old_ip = extract_dynamic_ip(current, &config.static_ips)
            .with_context(|| format!("Cannot determine the dynamic IP in rule '{}'", rule_name))?
            .to_string();

        if old_ip == new_ip {
            println!(
                "Rule {} already allows {}, nothing to do",
                rule_name,
                new_ip.cyan()
            );
            continue;
        }

        println!(
            "Old dynamic IP is {}, updating to {}",
            old_ip.yellow(),
            new_ip.cyan()
        );

        if args.dry_run {
            println!("{} skipping write for rule {}", "dry-run:".yellow(), rule_name);
            continue;
        }

        let mut properties = rule.properties.clone();
        properties.source_address_prefixes = replace_ip(current, &old_ip, &new_ip);

        client
            .put_rule(&config.target, rule_name, &properties, &token)
            .await
            .with_context(|| format!("Failed to update security rule '{}'", rule_name))?;

        println!(
            "{} NSG rule {}",
            "Successfully updated".bright_green(),
            rule_name
        );
    }

    Ok(())
}
