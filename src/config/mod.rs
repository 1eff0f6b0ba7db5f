//! Configuration loading for nsg-rotate
//!
//! Two sources with field-by-field precedence: environment variables
//! (including a `.env` file) override values from a TOML config file. The
//! file is `--config <path>` when given, otherwise
//! `~/.config/nsg-rotate/config.toml` if it exists.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::models::{Credentials, RuleTarget};

/// Fully resolved runtime configuration, passed down the call chain
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub target: RuleTarget,
    pub rule_names: Vec<String>,
    pub static_ips: Vec<String>,
    pub new_ip: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    auth: AuthSection,
    #[serde(default)]
    target: TargetSection,
    #[serde(default)]
    rotation: RotationSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AuthSection {
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetSection {
    subscription_id: Option<String>,
    resource_group: Option<String>,
    nsg_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RotationSection {
    rule_names: Option<Vec<String>>,
    static_ips: Option<Vec<String>>,
    new_ip: Option<String>,
}

impl Config {
    /// Load and validate configuration from the file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Pick up a .env file if one exists
        dotenvy::dotenv().ok();

        let file = Self::load_file(path)?;

        let tenant_id = env_var("NSG_ROTATE_TENANT_ID")
            .or(file.auth.tenant_id)
            .context("Tenant id not configured (NSG_ROTATE_TENANT_ID or [auth] tenant_id)")?;
        let client_id = env_var("NSG_ROTATE_CLIENT_ID")
            .or(file.auth.client_id)
            .context("Client id not configured (NSG_ROTATE_CLIENT_ID or [auth] client_id)")?;
        let client_secret = env_var("NSG_ROTATE_CLIENT_SECRET")
            .or(file.auth.client_secret)
            .context("Client secret not configured (NSG_ROTATE_CLIENT_SECRET or [auth] client_secret)")?;

        let subscription_id = env_var("NSG_ROTATE_SUBSCRIPTION_ID")
            .or(file.target.subscription_id)
            .context("Subscription id not configured (NSG_ROTATE_SUBSCRIPTION_ID or [target] subscription_id)")?;
        let resource_group = env_var("NSG_ROTATE_RESOURCE_GROUP")
            .or(file.target.resource_group)
            .context("Resource group not configured (NSG_ROTATE_RESOURCE_GROUP or [target] resource_group)")?;
        let nsg_name = env_var("NSG_ROTATE_NSG_NAME")
            .or(file.target.nsg_name)
            .context("NSG name not configured (NSG_ROTATE_NSG_NAME or [target] nsg_name)")?;

        let rule_names = env_var("NSG_ROTATE_RULE_NAMES")
            .map(|raw| split_list(&raw))
            .or(file.rotation.rule_names)
            .unwrap_or_default();
        if rule_names.is_empty() {
            anyhow::bail!(
                "No rule names configured (NSG_ROTATE_RULE_NAMES or [rotation] rule_names)"
            );
        }

        let static_ips = env_var("NSG_ROTATE_STATIC_IPS")
            .map(|raw| split_list(&raw))
            .or(file.rotation.static_ips)
            .unwrap_or_default();

        let new_ip = env_var("NSG_ROTATE_NEW_IP").or(file.rotation.new_ip);

        Ok(Self {
            credentials: Credentials {
                tenant_id,
                client_id,
                client_secret,
            },
            target: RuleTarget {
                subscription_id,
                resource_group,
                nsg_name,
            },
            rule_names,
            static_ips,
            new_ip,
        })
    }

    fn load_file(path: Option<&Path>) -> Result<FileConfig> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(FileConfig::default()),
            },
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nsg-rotate").join("config.toml"))
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Split a comma-separated list, trimming entries and dropping empty ones
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("1.1.1.1, 2.2.2.2 ,3.3.3.3"),
            vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]
        );
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_parse_full_file() {
        let file: FileConfig = toml::from_str(
            r#"
            [auth]
            tenant_id = "tenant"
            client_id = "client"
            client_secret = "secret"

            [target]
            subscription_id = "sub"
            resource_group = "rg"
            nsg_name = "nsg"

            [rotation]
            rule_names = ["allow-home", "allow-home-ssh"]
            static_ips = ["10.0.0.1", "10.0.0.2"]
            new_ip = "203.0.113.5"
            "#,
        )
        .unwrap();

        assert_eq!(file.auth.tenant_id.as_deref(), Some("tenant"));
        assert_eq!(
            file.rotation.rule_names,
            Some(vec!["allow-home".to_string(), "allow-home-ssh".to_string()])
        );
        assert_eq!(file.rotation.new_ip.as_deref(), Some("203.0.113.5"));
    }

    #[test]
    fn test_partial_file_leaves_fields_unset() {
        let file: FileConfig = toml::from_str(
            r#"
            [auth]
            tenant_id = "tenant"
            "#,
        )
        .unwrap();

        assert_eq!(file.auth.tenant_id.as_deref(), Some("tenant"));
        assert!(file.auth.client_id.is_none());
        assert!(file.rotation.rule_names.is_none());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<FileConfig, _> = toml::from_str(
            r#"
            [rotation]
            rule_name = "typo"
            "#,
        );
        assert!(result.is_err());
    }
}
