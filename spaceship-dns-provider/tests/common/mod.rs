//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};
use spaceship_dns_provider::{
    DnsRecordProvider, HttpRequest, HttpResponse, ProviderError, Record, RecordData, Result,
    SpaceshipConfig, SpaceshipProvider, Transport,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Mock Transport ============

/// 预设的一次响应
enum Scripted {
    Reply(Result<HttpResponse>),
    /// 永不返回，用于测试调用方丢弃 future
    Hang,
}

/// 记录所有请求、按顺序回放预设响应的 [`Transport`]
///
/// 预设响应用完后返回 500，方便发现多余的请求。
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Scripted>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 追加一个预设响应
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted::Reply(Ok(HttpResponse {
                status,
                body: body.into(),
            })));
        self
    }

    /// 追加一个 JSON 响应
    pub fn respond_json(&self, status: u16, body: &Value) -> &Self {
        self.respond(status, body.to_string())
    }

    /// 追加一个传输层错误
    pub fn fail(&self, error: ProviderError) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted::Reply(Err(error)));
        self
    }

    /// 追加一个永不完成的请求
    pub fn hang(&self) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted::Hang);
        self
    }

    /// 已收到的请求（按发送顺序）
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match next {
            Some(Scripted::Reply(reply)) => reply,
            Some(Scripted::Hang) => std::future::pending().await,
            None => Ok(HttpResponse {
                status: 500,
                body: "no scripted response".to_string(),
            }),
        }
    }
}

pub const MOCK_BASE_URL: &str = "https://mock.spaceship.test/api";
pub const MOCK_KEY: &str = "mock-api-key";
pub const MOCK_SECRET: &str = "mock-api-secret";

/// 使用 mock transport 的 Provider
pub fn mock_provider(transport: &Arc<MockTransport>) -> SpaceshipProvider {
    mock_provider_with_page_size(transport, 100)
}

pub fn mock_provider_with_page_size(
    transport: &Arc<MockTransport>,
    page_size: u32,
) -> SpaceshipProvider {
    SpaceshipProvider::builder(MOCK_KEY.to_string(), MOCK_SECRET.to_string())
        .base_url(MOCK_BASE_URL)
        .page_size(page_size)
        .transport(transport.clone())
        .build()
}

/// 请求体解析为 JSON（无请求体时为 `Null`）
pub fn request_json(request: &HttpRequest) -> Value {
    request
        .body
        .as_deref()
        .and_then(|b| serde_json::from_str(b).ok())
        .unwrap_or(Value::Null)
}

/// URL 中的查询参数值
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

// ============ 测试数据 ============

/// 一页列表响应，记录为 `host-{start}` .. `host-{start+count-1}` 的 A 记录
pub fn list_page(start: usize, count: usize, total: usize) -> Value {
    let items: Vec<Value> = (start..start + count)
        .map(|i| {
            json!({
                "type": "A",
                "name": format!("host-{i}"),
                "ttl": 300,
                "address": format!("192.0.2.{}", i % 250 + 1),
            })
        })
        .collect();
    json!({ "items": items, "total": total })
}

pub fn a_record(name: &str, address: &str) -> Record {
    Record::new(
        name,
        300,
        RecordData::A {
            address: address.to_string(),
        },
    )
}

pub fn txt_record(name: &str, text: &str) -> Record {
    Record::new(
        name,
        300,
        RecordData::TXT {
            text: text.to_string(),
        },
    )
}

/// Spaceship 无法表示的记录
pub fn sshfp_record(name: &str) -> Record {
    Record::new(
        name,
        300,
        RecordData::Other {
            record_type: "SSHFP".to_string(),
            data: "1 1 123456789abcdef67890123456789abcdef67890".to_string(),
        },
    )
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

// ============ 真实 API 测试上下文 ============

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsRecordProvider>,
    pub zone: String,
}

impl TestContext {
    /// 从 `LIBDNS_SPACESHIP_*` 和 `TEST_DOMAIN` 环境变量创建
    pub fn spaceship() -> Option<Self> {
        let config = SpaceshipConfig::from_env();
        if !config.has_credentials() {
            return None;
        }
        let zone = env::var("TEST_DOMAIN").ok()?;

        Some(Self {
            provider: Arc::new(SpaceshipProvider::from_config(config)),
            zone,
        })
    }

    /// 清理测试记录
    pub async fn cleanup(&self, records: &[Record]) {
        let _ = self.provider.delete_records(&self.zone, records).await;
    }
}
