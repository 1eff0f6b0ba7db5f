use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, SystemTime};

use super::constants::{self, ARM_DEFAULT_SCOPE};
use super::models::{Credentials, TokenInfo};

/// Acquires bearer tokens from Microsoft Entra ID using the OAuth2
/// client-credentials grant, scoped to the ARM management API.
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("nsg-rotate/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: constants::LOGIN_BASE_URL.to_string(),
        }
    }

    /// Exchange service principal credentials for an access token.
    ///
    /// Fails on any non-2xx response (bad credentials, wrong tenant,
    /// network failure); there is no retry.
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<TokenInfo> {
        let url = constants::token_endpoint(&self.base_url, &credentials.tenant_id);

        debug!(
            "Requesting token for tenant {} with client_id {}",
            credentials.tenant_id, credentials.client_id
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("scope", ARM_DEFAULT_SCOPE),
            ])
            .send()
            .await?;

        debug!("Token request status: {}", response.status());

        if response.status().is_success() {
            let token_data: Value = response.json().await?;

            let access_token = token_data
                .get("access_token")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow::anyhow!("No access token in response"))?;

            // Default to 1 hour if the response omits expires_in
            let expires_in = token_data
                .get("expires_in")
                .and_then(|e| e.as_u64())
                .unwrap_or(3600);

            info!(
                "Token obtained for tenant {} (valid {}s)",
                credentials.tenant_id, expires_in
            );

            Ok(TokenInfo {
                access_token: access_token.to_string(),
                expires_at: SystemTime::now() + Duration::from_secs(expires_in),
            })
        } else {
            let status = response.status();
            let error_text = response.text().await?;
            anyhow::bail!("Token request failed with status {}: {}", status, error_text)
        }
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}
