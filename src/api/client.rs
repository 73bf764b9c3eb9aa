//! Request Plumbing
//!
//! Base URL configuration and shared send helpers. Every request attaches
//! the persisted credential token as a bearer header when one exists; every
//! failure surfaces immediately with the server-supplied message when the
//! body carries one. No retries, no timeouts.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::session::TOKEN_KEY;

/// Default API base path (same-origin)
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key for overriding the API base URL
const API_URL_KEY: &str = "pokemap_api_url";

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Error body shape used by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

fn endpoint(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn bearer_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match bearer_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub(crate) fn get(path: &str) -> RequestBuilder {
    with_auth(Request::get(&endpoint(path)))
}

pub(crate) fn post(path: &str) -> RequestBuilder {
    with_auth(Request::post(&endpoint(path)))
}

pub(crate) fn delete(path: &str) -> RequestBuilder {
    with_auth(Request::delete(&endpoint(path)))
}

/// Prefer the server's error text; a body that does not parse falls back to
/// the caller's message with the HTTP status attached so it is not lost.
fn describe_failure(body: Option<ApiError>, status: u16, fallback: &str) -> String {
    match body {
        Some(err) => err.error,
        None => format!("{} (HTTP {})", fallback, status),
    }
}

async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.json::<ApiError>().await.ok();
    describe_failure(body, status, fallback)
}

/// Send a bodyless request and decode a JSON response
pub(crate) async fn fetch_json<T>(builder: RequestBuilder, fallback: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let response = builder
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a JSON body and decode a JSON response
pub(crate) async fn fetch_json_with<B, T>(
    builder: RequestBuilder,
    body: &B,
    fallback: &str,
) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a bodyless request, discarding any response body
pub(crate) async fn execute(builder: RequestBuilder, fallback: &str) -> Result<(), String> {
    let response = builder
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }

    Ok(())
}

/// Send a JSON body, discarding any response body
pub(crate) async fn execute_with<B>(
    builder: RequestBuilder,
    body: &B,
    fallback: &str,
) -> Result<(), String>
where
    B: serde::Serialize,
{
    let response = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_text_wins() {
        let body = Some(ApiError {
            error: "Invalid credentials".to_string(),
            code: None,
        });

        assert_eq!(
            describe_failure(body, 401, "Login failed. Please try again."),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_fallback_carries_the_http_status() {
        assert_eq!(
            describe_failure(None, 502, "Failed to load sightings"),
            "Failed to load sightings (HTTP 502)"
        );
    }
}
