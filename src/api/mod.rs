//! Azure Resource Manager API module
//!
//! Token acquisition against Microsoft Entra ID and read/replace access to
//! NSG security rule resources. One sequential HTTP call at a time; errors
//! propagate immediately with the HTTP status and response body attached.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;
pub mod session;

pub use auth::AuthClient;
pub use client::ArmClient;
pub use models::{Credentials, RuleProperties, RuleTarget, SecurityRule, TokenInfo};
pub use session::ArmSession;
