use anyhow::Result;
use log::debug;

use super::auth::AuthClient;
use super::models::{Credentials, TokenInfo};

/// Holds the bearer token for one run and acquires it lazily.
///
/// Within a normal run the token is fetched once, on the first call, and
/// reused for every subsequent request. Callers that invoke a single
/// operation standalone get the same behavior without authenticating up
/// front themselves.
pub struct ArmSession {
    auth: AuthClient,
    credentials: Credentials,
    token: Option<TokenInfo>,
}

impl ArmSession {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            auth: AuthClient::new(),
            credentials,
            token: None,
        }
    }

    /// Return the held access token, acquiring one first if none is held
    /// or the held one has expired.
    pub async fn token(&mut self) -> Result<String> {
        match &self.token {
            Some(token) if !token.is_expired() => {
                debug!("Using cached access token");
            }
            Some(_) => {
                debug!("Cached access token expired, re-authenticating");
                self.token = Some(self.auth.acquire_token(&self.credentials).await?);
            }
            None => {
                self.token = Some(self.auth.acquire_token(&self.credentials).await?);
            }
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => anyhow::bail!("Authentication succeeded but no token is held"),
        }
    }
}
