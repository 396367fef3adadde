//! Generic HTTP fetching with status mapping and response classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::constants::RIOT_TOKEN_HEADER;
use crate::error::AppError;

/// Per-request options for [`fetch`].
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct FetchOptions<'a> {
    /// API key sent in the `X-Riot-Token` header; omitted when `None`
    pub api_key: Option<&'a str>,
    /// Request timeout; the request is unbounded when `None`
    pub timeout: Option<Duration>,
}

/// Generic fetch function with status mapping and detailed error handling.
///
/// A single GET is issued. Failures are never retried: a non-success status,
/// a transport fault or an unparsable body is turned into the matching
/// [`AppError`] variant and handed back to the caller.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `options` - credential header and timeout for this request
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client, options))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    options: FetchOptions<'_>,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if let Some(api_key) = options.api_key {
        request = request.header(RIOT_TOKEN_HEADER, api_key);
    }
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(512).collect();
    debug!("Response text (first 512 chars): {preview}");

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);

        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            // Valid JSON but unexpected structure
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
