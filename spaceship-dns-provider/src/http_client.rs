//! Generic HTTP client tools
//!
//! `HttpUtils` holds the request flow shared by every transport: send, log, read the body.
//! `ReqwestTransport` is the default [`Transport`] built on top of it.
//!
//! Requests are attempted exactly once. Status codes are returned as-is; deciding
//! whether a status is a failure is up to the caller.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::traits::{HttpRequest, HttpResponse, Transport};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `provider_name` - Provider name (for logging and error tagging)
    /// * `method_name` - request method name (such as "GET", "PUT", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - for any status code
    /// * `Err(ProviderError::Timeout)` - the transport timeout elapsed
    /// * `Err(ProviderError::NetworkError)` - any other network failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else if e.is_builder() {
                ProviderError::RequestBuildError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !response_text.is_empty() {
            log::debug!(
                "[{provider_name}] Response Body: {}",
                truncate_for_log(&response_text)
            );
        }

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// [`Transport`] backed by a `reqwest::Client`.
///
/// Timeouts come from the client configuration, see
/// [`create_http_client`](crate::providers::common::create_http_client).
pub struct ReqwestTransport {
    client: Client,
    provider_name: &'static str,
}

impl ReqwestTransport {
    pub fn new(client: Client, provider_name: &'static str) -> Self {
        Self {
            client,
            provider_name,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ProviderError> {
        let method_name = request.method.to_string();
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let (status, body) =
            HttpUtils::execute_request(builder, self.provider_name, &method_name, &request.url)
                .await?;
        Ok(HttpResponse { status, body })
    }
}
