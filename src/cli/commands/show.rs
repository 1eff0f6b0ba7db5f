//! Show command handler

use anyhow::{Context, Result};
use colored::*;

use crate::api::{ArmClient, ArmSession};
use crate::config::Config;
use crate::rotate::extract_dynamic_ip;

/// Read every configured rule and print its source address prefixes,
/// flagging which entry is the dynamic one.
pub async fn show_command(config: Config) -> Result<()> {
    let client = ArmClient::new();
    let mut session = ArmSession::new(config.credentials.clone());

    for rule_name in &config.rule_names {
        let token = session.token().await?;

        let rule = client
            .get_rule(&config.target, rule_name, &token)
            .await
            .with_context(|| format!("Failed to read security rule '{}'", rule_name))?;

        let prefixes = &rule.properties.source_address_prefixes;
        println!("{}", rule_name.bright_green().bold());

        if prefixes.is_empty() {
            println!("  {}", "no sourceAddressPrefixes on this rule".dimmed());
            continue;
        }

        match extract_dynamic_ip(prefixes, &config.static_ips) {
            Ok(dynamic) => {
                let dynamic = dynamic.to_string();
                for ip in prefixes {
                    if *ip == dynamic {
                        println!("  {} {}", ip.cyan(), "(dynamic)".yellow());
                    } else {
                        println!("  {}", ip);
                    }
                }
            }
            Err(err) => {
                for ip in prefixes {
                    println!("  {}", ip);
                }
                println!("  {} {}", "warning:".yellow(), err);
            }
        }
    }

    Ok(())
}
