use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::types::Record;

/// 发往远端 API 的一次 HTTP 请求（与具体 HTTP 库无关）
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// 完整 URL（含 query string）
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// 已序列化的 JSON 请求体
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 按名称查找请求头（忽略大小写）
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// 远端 API 的原始响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP 传输层
///
/// 只负责把请求发出去并读回状态码和响应体。网络层失败映射为
/// `NetworkError` / `Timeout`；状态码的业务含义由调用方判断。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// DNS 记录管理 Trait
///
/// 记录名称均为相对 zone 的名称（apex 为 `"@"`）。zone 末尾的 `.` 可有可无。
#[async_trait]
pub trait DnsRecordProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 zone 下的全部记录（内部自动翻页）
    ///
    /// 无法表示的记录类型会被跳过，不视为错误。
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// 追加记录，不覆盖已有的冲突记录
    ///
    /// 返回实际发送的记录；无法表示的记录类型会被丢弃。
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// 写入记录，强制覆盖同名同类型的已有记录
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// 删除记录
    ///
    /// 任一记录类型无法表示时整个操作失败，不会发出请求。
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
