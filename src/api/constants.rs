//! API constants and endpoint builders for Azure Resource Manager

use super::models::RuleTarget;

/// Azure Resource Manager base URL
pub const ARM_BASE_URL: &str = "https://management.azure.com";

/// OAuth2 scope covering the full ARM surface
pub const ARM_DEFAULT_SCOPE: &str = "https://management.azure.com/.default";

/// Microsoft Entra ID base URL for token requests
pub const LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

/// API version of the Microsoft.Network resource provider
pub const NETWORK_API_VERSION: &str = "2023-09-01";

/// Standard headers for ARM requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Build the OAuth2 v2.0 token endpoint URL for a tenant
pub fn token_endpoint(base_url: &str, tenant_id: &str) -> String {
    format!("{}/{}/oauth2/v2.0/token", base_url, urlencoding::encode(tenant_id))
}

/// Build the full securityRules resource URL for one named rule
pub fn rule_endpoint(base_url: &str, target: &RuleTarget, rule_name: &str) -> String {
    format!(
        "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/networkSecurityGroups/{}/securityRules/{}?api-version={}",
        base_url,
        target.subscription_id,
        target.resource_group,
        target.nsg_name,
        urlencoding::encode(rule_name),
        NETWORK_API_VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> RuleTarget {
        RuleTarget {
            subscription_id: "00000000-0000-0000-0000-000000000000".to_string(),
            resource_group: "home-rg".to_string(),
            nsg_name: "home-nsg".to_string(),
        }
    }

    #[test]
    fn test_token_endpoint() {
        assert_eq!(
            token_endpoint(LOGIN_BASE_URL, "contoso.onmicrosoft.com"),
            "https://login.microsoftonline.com/contoso.onmicrosoft.com/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_rule_endpoint() {
        assert_eq!(
            rule_endpoint(ARM_BASE_URL, &target(), "allow-home"),
            "https://management.azure.com/subscriptions/00000000-0000-0000-0000-000000000000\
             /resourceGroups/home-rg/providers/Microsoft.Network/networkSecurityGroups/home-nsg\
             /securityRules/allow-home?api-version=2023-09-01"
        );
    }

    #[test]
    fn test_rule_endpoint_encodes_rule_name() {
        let url = rule_endpoint(ARM_BASE_URL, &target(), "allow home ips");
        assert!(url.contains("/securityRules/allow%20home%20ips?"));
    }
}
