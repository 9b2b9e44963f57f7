//! Spaceship Provider

mod codec;
mod convert;
mod http;
mod provider;
mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::config::SpaceshipConfig;
use crate::http_client::ReqwestTransport;
use crate::providers::common::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};
use crate::traits::Transport;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{ListResponse, UpsertRequest, WireRecord};

pub(crate) const PROVIDER_NAME: &str = "spaceship";
pub(crate) const SPACESHIP_API_BASE: &str = "https://spaceship.dev/api";
/// 列表接口默认每页条数
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 100;

/// Spaceship DNS Provider
pub struct SpaceshipProvider {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
    /// 不带末尾 `/`
    pub(crate) base_url: String,
    pub(crate) page_size: u32,
}

impl std::fmt::Debug for SpaceshipProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceshipProvider")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &mask_secret(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Spaceship Provider Builder
pub struct SpaceshipProviderBuilder {
    api_key: String,
    api_secret: String,
    base_url: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl SpaceshipProviderBuilder {
    fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
            base_url: None,
            page_size: None,
            timeout: None,
            transport: None,
        }
    }

    /// API 根地址，默认 `https://spaceship.dev/api`
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// 列表接口每页条数，0 表示使用默认值
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// 单次请求超时；设置了自定义 transport 时不生效
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 替换 HTTP 传输层
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> SpaceshipProvider {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
                Arc::new(ReqwestTransport::new(
                    create_http_client(timeout),
                    PROVIDER_NAME,
                ))
            }
        };

        let base_url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(SPACESHIP_API_BASE)
            .trim_end_matches('/')
            .to_string();

        SpaceshipProvider {
            transport,
            api_key: self.api_key,
            api_secret: self.api_secret,
            base_url,
            page_size: self
                .page_size
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl SpaceshipProvider {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::builder(api_key, api_secret).build()
    }

    pub fn builder(api_key: String, api_secret: String) -> SpaceshipProviderBuilder {
        SpaceshipProviderBuilder::new(api_key, api_secret)
    }

    /// 按配置构造；未设置的项使用默认值
    pub fn from_config(config: SpaceshipConfig) -> Self {
        Self::config_builder(config).build()
    }

    /// 与 [`from_config`](Self::from_config) 相同，但返回 builder 以便继续定制
    pub fn config_builder(config: SpaceshipConfig) -> SpaceshipProviderBuilder {
        let mut builder = Self::builder(config.api_key, config.api_secret);
        builder.base_url = config.base_url;
        builder.page_size = config.page_size;
        builder.timeout = config.timeout_secs.map(Duration::from_secs);
        builder
    }

    /// 从 `LIBDNS_SPACESHIP_*` 环境变量构造
    pub fn from_env() -> Self {
        Self::from_config(SpaceshipConfig::from_env())
    }

    /// 实际使用的 API 根地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 实际使用的每页条数
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
