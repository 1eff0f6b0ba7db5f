use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::SystemTime;

/// Service principal credentials for the client-credentials grant
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Path components identifying the NSG that owns the configured rules
#[derive(Debug, Clone)]
pub struct RuleTarget {
    pub subscription_id: String,
    pub resource_group: String,
    pub nsg_name: String,
}

/// Cached token information
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_at: SystemTime,
}

impl TokenInfo {
    pub fn is_expired(&self) -> bool {
        if let Ok(elapsed) = self.expires_at.elapsed() {
            elapsed.as_secs() > 0
        } else {
            false // expiry still lies in the future
        }
    }
}

/// ARM representation of one NSG security rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    pub properties: RuleProperties,
}

/// The rule's properties bag.
///
/// Only `sourceAddressPrefixes` is typed; every other field is carried
/// verbatim in `rest` so a read-modify-write cycle sends the complete bag
/// back unchanged. The ARM API rejects partial property updates, so the
/// writer must always submit everything the reader returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProperties {
    #[serde(
        rename = "sourceAddressPrefixes",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub source_address_prefixes: Vec<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
