mod settings;

pub use settings::{ConfigError, Settings, API_KEY_VAR, CHECK_IPV6_VAR, DOMAIN_VAR};
