//! HTTP API Client
//!
//! One generic GET against the configured backend. Single best-effort
//! attempt: no retry, no backoff, no timeout beyond the platform's.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;

/// Fetch one resource from `base_url + path` and decode it as `T`.
///
/// A non-success status becomes [`ApiError::RequestFailed`]; transport
/// failures and undecodable bodies become [`ApiError::Transport`].
pub async fn fetch_resource<T: DeserializeOwned>(
    config: &ApiConfig,
    path: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{}", config.base_url, path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport {
            path: path.to_string(),
            detail: e.to_string(),
        })?;

    if !response.ok() {
        return Err(ApiError::RequestFailed {
            path: path.to_string(),
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response.json().await.map_err(|e| ApiError::Transport {
        path: path.to_string(),
        detail: e.to_string(),
    })
}
