use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

use super::{ApiError, CommandStatus, DreamhostApi};
use crate::ip;
use crate::records::AddressFamily;

const DREAMHOST_API_BASE: &str = "https://api.dreamhost.com";
const IPV4_LOOKUP_URL: &str = "https://checkip.amazonaws.com";
const IPV6_LOOKUP_URL: &str = "https://api6.ipify.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed [`DreamhostApi`] implementation.
///
/// DreamHost's API is a single GET endpoint taking `cmd` plus command
/// arguments as query parameters; every call carries a fresh `unique_id`
/// so the provider can de-duplicate replays.
pub struct DreamhostClient {
    http: Client,
    api_key: String,
    api_base: String,
    ipv4_lookup: String,
    ipv6_lookup: String,
}

impl DreamhostClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoints(api_key, DREAMHOST_API_BASE, IPV4_LOOKUP_URL, IPV6_LOOKUP_URL)
    }

    /// Build a client against non-default endpoints. Mostly useful for
    /// pointing tests at a local mock server.
    pub fn with_endpoints(
        api_key: &str,
        api_base: &str,
        ipv4_lookup: &str,
        ipv6_lookup: &str,
    ) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.to_string(),
            api_base: api_base.to_string(),
            ipv4_lookup: ipv4_lookup.to_string(),
            ipv6_lookup: ipv6_lookup.to_string(),
        }
    }

    fn command_url(&self, command: &str) -> String {
        format!(
            "{}/?key={}&cmd={}&unique_id={}",
            self.api_base,
            self.api_key,
            command,
            Uuid::new_v4()
        )
    }

    async fn call(&self, command: &str) -> Result<String, ApiError> {
        let url = self.command_url(command);
        debug!(command, "api request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { url, source })?;

        debug!(body = body.trim(), "api response");
        Ok(body)
    }

    fn lookup_url(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::V4 => &self.ipv4_lookup,
            AddressFamily::V6 => &self.ipv6_lookup,
        }
    }
}

#[async_trait]
impl DreamhostApi for DreamhostClient {
    async fn list_records(&self) -> Result<String, ApiError> {
        self.call("dns-list_records").await
    }

    async fn remove_record(
        &self,
        record: &str,
        record_type: &str,
        value: &str,
    ) -> Result<CommandStatus, ApiError> {
        let command = format!(
            "dns-remove_record&record={}&type={}&value={}",
            record, record_type, value
        );
        let body = self.call(&command).await?;
        Ok(CommandStatus::from_body(&body))
    }

    async fn add_record(
        &self,
        record: &str,
        record_type: &str,
        value: &str,
    ) -> Result<CommandStatus, ApiError> {
        let command = format!(
            "dns-add_record&record={}&type={}&value={}",
            record, record_type, value
        );
        let body = self.call(&command).await?;
        Ok(CommandStatus::from_body(&body))
    }

    async fn current_host_address(&self, family: AddressFamily) -> Result<String, ApiError> {
        ip::fetch_address(&self.http, self.lookup_url(family)).await
    }
}
