//! Shared HTTP plumbing for the geocoder and forecast clients.

use reqwest::Client;
use serde::de::DeserializeOwned;
use skycast_core::{NetworkError, WeatherConfig};
use std::time::Duration;

use crate::error::LookupError;

/// Build the client shared by both upstream calls.
pub fn build_client(config: &WeatherConfig) -> Result<Client, LookupError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Check the status and decode a JSON body.
///
/// Non-2xx statuses and malformed bodies both surface as transport errors.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LookupError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        tracing::debug!("Upstream returned status {}: {}", status, text);
        return Err(NetworkError::ServerError {
            status: status.as_u16(),
            message: text,
        }
        .into());
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| NetworkError::InvalidResponse(format!("JSON parse error: {}", e)).into())
}

/// Join a configured base URL with an endpoint path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(endpoint("http://h/v1/", "/forecast"), "http://h/v1/forecast");
        assert_eq!(endpoint("http://h", "search"), "http://h/search");
    }
}
