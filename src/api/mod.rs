mod client;

pub use client::DreamhostClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::records::AddressFamily;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("address lookup returned something that is not an address: {body:?}")]
    BadAddress { body: String },
}

/// Result of a single write command against the provider.
///
/// DreamHost reports failures in-band: the HTTP exchange succeeds and the
/// body carries an error marker. That quirk is decoded here, once, so
/// callers branch on a tagged value instead of scanning response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    ProviderError(String),
}

impl CommandStatus {
    pub(crate) fn from_body(body: &str) -> Self {
        if body.contains("error") {
            CommandStatus::ProviderError(body.trim().to_string())
        } else {
            CommandStatus::Success
        }
    }
}

/// The commands one reconciliation pass needs from DreamHost, plus the
/// public-address lookup used to observe the host's side of the comparison.
///
/// `Err` means the call could not complete at the transport level; in-band
/// provider failures come back as `Ok(CommandStatus::ProviderError)`.
#[async_trait]
pub trait DreamhostApi: Send + Sync {
    /// Fetch the raw record listing for the whole account.
    async fn list_records(&self) -> Result<String, ApiError>;

    /// Delete one record identified by its exact (name, type, value).
    async fn remove_record(
        &self,
        record: &str,
        record_type: &str,
        value: &str,
    ) -> Result<CommandStatus, ApiError>;

    /// Add one record.
    async fn add_record(
        &self,
        record: &str,
        record_type: &str,
        value: &str,
    ) -> Result<CommandStatus, ApiError>;

    /// Discover the host's current public address for the given family.
    async fn current_host_address(&self, family: AddressFamily) -> Result<String, ApiError>;
}
