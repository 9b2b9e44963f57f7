//! Spaceship API 类型定义
//!
//! Spaceship 的记录 JSON 是一个扁平结构，所有记录类型共用一套可选字段。
//! 这里改为每种类型一个变体，只携带该类型有意义的字段；
//! 扁平 JSON 与变体之间的转换集中在 `codec.rs`。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// SRV `port` 字段的原始表示
///
/// API 可能返回数字 `443`，也可能返回字符串 `"_443"` / `"443"`。
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawPort {
    Number(Number),
    Text(String),
}

/// SRV 端口：规范化后的整数 + 原始表示（重新序列化时原样输出）
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SrvPort {
    /// 无法解析为合法端口时为 `None`
    pub(crate) normalized: Option<u16>,
    pub(crate) raw: RawPort,
}

impl SrvPort {
    pub(crate) fn from_number(port: u16) -> Self {
        Self {
            normalized: Some(port),
            raw: RawPort::Number(port.into()),
        }
    }

    /// 按顺序尝试：整数 → 字符串（可带 `_` 前缀）
    ///
    /// 既不是数字也不是字符串时返回 `None`。
    pub(crate) fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self {
                normalized: n.as_u64().and_then(|v| u16::try_from(v).ok()),
                raw: RawPort::Number(n.clone()),
            }),
            Value::String(s) => {
                let digits = s.strip_prefix('_').unwrap_or(s);
                Some(Self {
                    normalized: digits.parse::<u16>().ok(),
                    raw: RawPort::Text(s.clone()),
                })
            }
            _ => None,
        }
    }
}

impl Serialize for SrvPort {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            RawPort::Number(n) => n.serialize(serializer),
            RawPort::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// HTTPS/SVCB 目标名称来自哪个 JSON 键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SvcTargetKey {
    #[default]
    SvcTarget,
    TargetName,
}

impl SvcTargetKey {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::SvcTarget => "svcTarget",
            Self::TargetName => "targetName",
        }
    }
}

/// HTTPS/SVCB 共用字段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ServiceBinding {
    pub(crate) svc_priority: u16,
    pub(crate) target: String,
    pub(crate) target_key: SvcTargetKey,
    pub(crate) svc_params: String,
}

/// 各记录类型的数据，字段名对应 API 的 JSON 键
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WireData {
    A {
        address: String,
    },
    Aaaa {
        address: String,
    },
    Cname {
        cname: String,
    },
    Mx {
        exchange: String,
        preference: u16,
    },
    Txt {
        value: String,
    },
    Ns {
        nameserver: String,
    },
    Ptr {
        pointer: String,
    },
    Srv {
        service: String,
        protocol: String,
        priority: u16,
        weight: u16,
        port: Option<SrvPort>,
        target: String,
    },
    Caa {
        /// 0 是合法值，缺失与 0 必须区分
        flag: Option<u8>,
        tag: String,
        value: String,
    },
    Https(ServiceBinding),
    Svcb(ServiceBinding),
    /// 未支持的类型：保留除 type/name/ttl 外的全部原始字段
    Unknown {
        record_type: String,
        fields: Map<String, Value>,
    },
}

/// Spaceship 记录（请求/响应共用）
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WireRecord {
    pub(crate) name: String,
    pub(crate) ttl: u32,
    pub(crate) data: WireData,
}

impl WireRecord {
    /// `type` 字段的值
    pub(crate) fn record_type(&self) -> &str {
        match &self.data {
            WireData::A { .. } => "A",
            WireData::Aaaa { .. } => "AAAA",
            WireData::Cname { .. } => "CNAME",
            WireData::Mx { .. } => "MX",
            WireData::Txt { .. } => "TXT",
            WireData::Ns { .. } => "NS",
            WireData::Ptr { .. } => "PTR",
            WireData::Srv { .. } => "SRV",
            WireData::Caa { .. } => "CAA",
            WireData::Https(_) => "HTTPS",
            WireData::Svcb(_) => "SVCB",
            WireData::Unknown { record_type, .. } => record_type,
        }
    }
}

/// `GET /v1/dns/records/{zone}` 响应
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    /// 逐条交给 codec 容错解析
    #[serde(default)]
    pub(crate) items: Option<Vec<Value>>,
    #[serde(default)]
    pub(crate) total: u64,
}

/// `PUT /v1/dns/records/{zone}` 请求体
#[derive(Debug, Serialize)]
pub(crate) struct UpsertRequest<'a> {
    pub(crate) force: bool,
    pub(crate) items: &'a [WireRecord],
}
