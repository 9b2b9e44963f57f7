//! Spaceship HTTP 请求方法

use reqwest::Method;
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::traits::{HttpRequest, HttpResponse};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{PROVIDER_NAME, SpaceshipProvider};

impl SpaceshipProvider {
    /// 两项凭证缺一即失败，不发出任何请求
    pub(crate) fn ensure_credentials(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            return Err(ProviderError::MissingCredentials {
                provider: PROVIDER_NAME.to_string(),
            });
        }
        Ok(())
    }

    /// `{base}/v1/dns/records/{zone}`，zone 需已去掉末尾的 `.`
    pub(crate) fn records_url(&self, zone: &str) -> String {
        format!(
            "{}/v1/dns/records/{}",
            self.base_url,
            urlencoding::encode(zone)
        )
    }

    pub(crate) fn encode_body<B: Serialize>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ProviderError::RequestBuildError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("failed to encode request body: {e}"),
        })
    }

    /// 执行 Spaceship API 请求
    ///
    /// 状态码 >= 400 映射为 `ApiError`，携带原始响应体。
    pub(crate) async fn request(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<HttpResponse> {
        let mut request = HttpRequest::new(method, url)
            .header("X-API-Key", self.api_key.clone())
            .header("X-API-Secret", self.api_secret.clone())
            .header("Accept", "application/json");

        if let Some(body) = body {
            log::debug!("[{PROVIDER_NAME}] Request Body: {}", truncate_for_log(&body));
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let method_name = request.method.to_string();
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if response.status >= 400 {
            log::error!(
                "[{PROVIDER_NAME}] {method_name} {url} failed with status {}: {}",
                response.status,
                truncate_for_log(&response.body)
            );
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_url_encodes_zone() {
        let provider = SpaceshipProvider::builder("k".to_string(), "s".to_string())
            .base_url("https://api.example/")
            .build();
        assert_eq!(
            provider.records_url("example.com"),
            "https://api.example/v1/dns/records/example.com"
        );
        assert_eq!(
            provider.records_url("a b"),
            "https://api.example/v1/dns/records/a%20b"
        );
    }

    #[test]
    fn credentials_required() {
        let provider = SpaceshipProvider::new("key".to_string(), String::new());
        assert!(matches!(
            provider.ensure_credentials(),
            Err(ProviderError::MissingCredentials { .. })
        ));
        let provider = SpaceshipProvider::new("key".to_string(), "secret".to_string());
        assert!(provider.ensure_credentials().is_ok());
    }
}
