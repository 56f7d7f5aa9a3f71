use std::net::IpAddr;

use reqwest::Client;

use crate::api::ApiError;

/// Fetch the host's public address from a discovery endpoint.
///
/// The returned string is the trimmed response body, not a re-rendered
/// address: record values are compared byte-for-byte, so the text is only
/// validated as an address (catching HTML error pages and the like), never
/// canonicalized.
pub(crate) async fn fetch_address(client: &Client, url: &str) -> Result<String, ApiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

    let addr = body.trim();
    if addr.parse::<IpAddr>().is_err() {
        return Err(ApiError::BadAddress {
            body: addr.to_string(),
        });
    }

    Ok(addr.to_string())
}
