use serde::Serialize;
use thiserror::Error;

pub const API_KEY_VAR: &str = "DREAMHOST_API_KEY";
pub const DOMAIN_VAR: &str = "DREAMHOST_UPDATE_DOMAIN";
pub const CHECK_IPV6_VAR: &str = "CHECK_IPV6";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{API_KEY_VAR} is not set or empty")]
    MissingApiKey,
    #[error("{DOMAIN_VAR} is not set or empty")]
    MissingDomain,
}

/// Runtime configuration, built once at startup from the process
/// environment and passed by reference from there on.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub api_key: String,
    pub domain: String,
    pub check_ipv6: bool,
}

impl Settings {
    /// Read configuration from the process environment. A missing or empty
    /// API key or domain is fatal before any network activity.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        let domain = lookup(DOMAIN_VAR).unwrap_or_default();

        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if domain.is_empty() {
            return Err(ConfigError::MissingDomain);
        }

        let check_ipv6 = lookup(CHECK_IPV6_VAR)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Settings {
            api_key,
            domain,
            check_ipv6,
        })
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: "********".to_string(),
            ..self.clone()
        }
    }
}
