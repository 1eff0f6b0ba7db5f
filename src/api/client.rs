use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::time::Duration;

use super::constants::{self, headers};
use super::models::{RuleProperties, RuleTarget, SecurityRule};

/// Azure Resource Manager client for NSG security rules
#[derive(Clone)]
pub struct ArmClient {
    base_url: String,
    http_client: reqwest::Client,
}

/// PUT body wrapper; the ARM API expects the full properties bag under a
/// single `properties` key.
#[derive(Serialize)]
struct RuleUpdate<'a> {
    properties: &'a RuleProperties,
}

impl ArmClient {
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("nsg-rotate/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: constants::ARM_BASE_URL.to_string(),
            http_client,
        }
    }

    /// Fetch the full representation of one named security rule
    pub async fn get_rule(
        &self,
        target: &RuleTarget,
        rule_name: &str,
        access_token: &str,
    ) -> Result<SecurityRule> {
        let url = constants::rule_endpoint(&self.base_url, target, rule_name);

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .send()
            .await?;

        self.parse_rule_response("GET", rule_name, response).await
    }

    /// Replace a security rule with the given properties bag.
    ///
    /// The write is a full replace: partial updates are not supported by
    /// the API, so `properties` must be the complete bag returned by
    /// [`ArmClient::get_rule`] with only the desired fields changed.
    pub async fn put_rule(
        &self,
        target: &RuleTarget,
        rule_name: &str,
        properties: &RuleProperties,
        access_token: &str,
    ) -> Result<SecurityRule> {
        let url = constants::rule_endpoint(&self.base_url, target, rule_name);

        debug!("PUT {}", url);

        let response = self
            .http_client
            .put(&url)
            .bearer_auth(access_token)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(&RuleUpdate { properties })
            .send()
            .await?;

        self.parse_rule_response("PUT", rule_name, response).await
    }

    async fn parse_rule_response(
        &self,
        method: &str,
        rule_name: &str,
        response: reqwest::Response,
    ) -> Result<SecurityRule> {
        let status = response.status();
        debug!("{} securityRules/{} returned {}", method, rule_name, status);

        if status.is_success() {
            response
                .json()
                .await
                .with_context(|| format!("Failed to parse response for security rule '{}'", rule_name))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!(
                "{} for security rule '{}' failed with status {}: {}",
                method,
                rule_name,
                status,
                error_text
            )
        }
    }
}

impl Default for ArmClient {
    fn default() -> Self {
        Self::new()
    }
}
