//! Spaceship 客户端配置
//!
//! 可由调用方直接构造（或从 JSON/TOML 等反序列化），也可从环境变量补全未设置的字段。

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

pub const ENV_API_KEY: &str = "LIBDNS_SPACESHIP_APIKEY";
pub const ENV_API_SECRET: &str = "LIBDNS_SPACESHIP_APISECRET";
pub const ENV_BASE_URL: &str = "LIBDNS_SPACESHIP_BASEURL";
pub const ENV_PAGE_SIZE: &str = "LIBDNS_SPACESHIP_PAGESIZE";
pub const ENV_TIMEOUT: &str = "LIBDNS_SPACESHIP_TIMEOUT";

/// Spaceship 客户端配置
///
/// 所有字段均可省略；缺失的凭证直到第一次调用 API 时才会报错。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceshipConfig {
    /// API Key（`X-API-Key`）
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// API Secret（`X-API-Secret`）
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_secret: String,
    /// API 根地址，默认 `https://spaceship.dev/api`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// 列表接口每页条数，默认 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// 请求超时（秒），默认 30
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SpaceshipConfig {
    /// 完全从环境变量构造
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.populate_from_env();
        config
    }

    /// 用环境变量补全尚未设置的字段，已设置的字段保持不变
    pub fn populate_from_env(&mut self) {
        self.populate_with(|key| std::env::var(key).ok());
    }

    /// 与 [`populate_from_env`](Self::populate_from_env) 相同，但变量来源可替换
    pub fn populate_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if self.api_key.is_empty()
            && let Some(v) = lookup(ENV_API_KEY)
        {
            self.api_key = v;
        }
        if self.api_secret.is_empty()
            && let Some(v) = lookup(ENV_API_SECRET)
        {
            self.api_secret = v;
        }
        if self.base_url.is_none() {
            self.base_url = lookup(ENV_BASE_URL);
        }
        if self.page_size.is_none() {
            self.page_size = lookup(ENV_PAGE_SIZE).and_then(|v| parse_positive(ENV_PAGE_SIZE, &v));
        }
        if self.timeout_secs.is_none() {
            self.timeout_secs = lookup(ENV_TIMEOUT).and_then(|v| parse_positive(ENV_TIMEOUT, &v));
        }
    }

    /// 两项凭证是否都已设置
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl std::fmt::Debug for SpaceshipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceshipConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &mask_secret(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// 解析正整数，非法值记录日志后忽略
fn parse_positive<T>(key: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n > T::default() => Some(n),
        _ => {
            log::warn!("Ignoring invalid value for {key}: {value:?}");
            None
        }
    }
}
