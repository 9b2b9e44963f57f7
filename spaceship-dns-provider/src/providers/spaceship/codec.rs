//! Spaceship 扁平 JSON 与 [`WireRecord`] 之间的编解码
//!
//! 解码是宽容的：单个字段类型不符时保留零值并记录一条 [`SkippedField`]，
//! 继续解析其余字段。只有顶层不是 JSON 对象时才失败。
//!
//! 编码只输出非默认值字段；`type` 和 `name` 总是输出。

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::{ProviderError, Result};

use super::PROVIDER_NAME;
use super::types::{ServiceBinding, SrvPort, SvcTargetKey, WireData, WireRecord};

/// 解码时被忽略的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkippedField {
    pub(crate) field: &'static str,
    pub(crate) reason: String,
}

impl std::fmt::Display for SkippedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// 解码结果 + 诊断信息
#[derive(Debug, Clone)]
pub(crate) struct Decoded<T> {
    pub(crate) value: T,
    pub(crate) skipped: Vec<SkippedField>,
}

/// JSON 值的类型名，用于诊断信息
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 逐字段读取，类型不符时记录并返回零值
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    skipped: Vec<SkippedField>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, field: &'static str, reason: impl Into<String>) {
        self.skipped.push(SkippedField {
            field,
            reason: reason.into(),
        });
    }

    /// 缺失或为 null 时返回 `None`
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    fn string(&mut self, field: &'static str) -> String {
        match self.get(field) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.skip(field, format!("expected string, got {}", json_kind(other)));
                String::new()
            }
        }
    }

    fn uint<T>(&mut self, field: &'static str) -> T
    where
        T: TryFrom<u64> + Default,
    {
        match self.get(field) {
            None => T::default(),
            Some(Value::Number(n)) => match n.as_u64().map(T::try_from) {
                Some(Ok(v)) => v,
                _ => {
                    self.skip(field, format!("number {n} out of range"));
                    T::default()
                }
            },
            Some(other) => {
                self.skip(field, format!("expected number, got {}", json_kind(other)));
                T::default()
            }
        }
    }

    /// 与 `uint` 相同，但缺失时保持 `None`
    fn optional_uint<T>(&mut self, field: &'static str) -> Option<T>
    where
        T: TryFrom<u64> + Default,
    {
        let before = self.skipped.len();
        self.get(field)?;
        let value = self.uint(field);
        (self.skipped.len() == before).then_some(value)
    }

    fn port(&mut self) -> Option<SrvPort> {
        let value = self.get("port")?;
        match SrvPort::parse(value) {
            Some(port) => {
                if port.normalized.is_none() {
                    self.skip("port", format!("{value} is not a valid port, raw value kept"));
                }
                Some(port)
            }
            None => {
                self.skip(
                    "port",
                    format!("expected number or string, got {}", json_kind(value)),
                );
                None
            }
        }
    }

    fn service_binding(&mut self) -> ServiceBinding {
        let svc_priority = self.uint("svcPriority");
        let svc_target = self.string("svcTarget");
        let target_name = self.string("targetName");
        let (target, target_key) = if svc_target.is_empty() && !target_name.is_empty() {
            (target_name, SvcTargetKey::TargetName)
        } else {
            (svc_target, SvcTargetKey::SvcTarget)
        };
        ServiceBinding {
            svc_priority,
            target,
            target_key,
            svc_params: self.string("svcParams"),
        }
    }
}

impl WireRecord {
    /// 从 API 返回的 JSON 对象解码
    ///
    /// 只读取 `type` 对应的字段，其余字段直接忽略。
    pub(crate) fn decode(value: &Value) -> Result<Decoded<Self>> {
        let Value::Object(object) = value else {
            return Err(ProviderError::ParseError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("record must be a JSON object, got {}", json_kind(value)),
            });
        };

        let mut r = FieldReader::new(object);
        let record_type = r.string("type");
        let name = r.string("name");
        let ttl = r.uint("ttl");

        let data = match record_type.to_ascii_uppercase().as_str() {
            "A" => WireData::A {
                address: r.string("address"),
            },
            "AAAA" => WireData::Aaaa {
                address: r.string("address"),
            },
            "CNAME" => WireData::Cname {
                cname: r.string("cname"),
            },
            "MX" => WireData::Mx {
                exchange: r.string("exchange"),
                preference: r.uint("preference"),
            },
            "TXT" => WireData::Txt {
                value: r.string("value"),
            },
            "NS" => WireData::Ns {
                nameserver: r.string("nameserver"),
            },
            "PTR" => WireData::Ptr {
                pointer: r.string("pointer"),
            },
            "SRV" => WireData::Srv {
                service: r.string("service"),
                protocol: r.string("protocol"),
                priority: r.uint("priority"),
                weight: r.uint("weight"),
                port: r.port(),
                target: r.string("target"),
            },
            "CAA" => WireData::Caa {
                flag: r.optional_uint("flag"),
                tag: r.string("tag"),
                value: r.string("value"),
            },
            "HTTPS" => WireData::Https(r.service_binding()),
            "SVCB" => WireData::Svcb(r.service_binding()),
            _ => {
                let fields = object
                    .iter()
                    .filter(|(k, _)| !matches!(k.as_str(), "type" | "name" | "ttl"))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                WireData::Unknown {
                    record_type,
                    fields,
                }
            }
        };

        Ok(Decoded {
            value: Self { name, ttl, data },
            skipped: r.skipped,
        })
    }
}

fn put_str<M: SerializeMap>(
    map: &mut M,
    key: &str,
    value: &str,
) -> std::result::Result<(), M::Error> {
    if value.is_empty() {
        Ok(())
    } else {
        map.serialize_entry(key, value)
    }
}

fn put_uint<M: SerializeMap>(
    map: &mut M,
    key: &str,
    value: u16,
) -> std::result::Result<(), M::Error> {
    if value == 0 {
        Ok(())
    } else {
        map.serialize_entry(key, &value)
    }
}

fn put_binding<M: SerializeMap>(
    map: &mut M,
    binding: &ServiceBinding,
) -> std::result::Result<(), M::Error> {
    put_uint(map, "svcPriority", binding.svc_priority)?;
    put_str(map, binding.target_key.as_str(), &binding.target)?;
    put_str(map, "svcParams", &binding.svc_params)
}

impl Serialize for WireRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.record_type())?;
        map.serialize_entry("name", &self.name)?;
        if self.ttl != 0 {
            map.serialize_entry("ttl", &self.ttl)?;
        }

        match &self.data {
            WireData::A { address } | WireData::Aaaa { address } => {
                put_str(&mut map, "address", address)?;
            }
            WireData::Cname { cname } => put_str(&mut map, "cname", cname)?,
            WireData::Mx {
                exchange,
                preference,
            } => {
                put_str(&mut map, "exchange", exchange)?;
                put_uint(&mut map, "preference", *preference)?;
            }
            WireData::Txt { value } => put_str(&mut map, "value", value)?,
            WireData::Ns { nameserver } => put_str(&mut map, "nameserver", nameserver)?,
            WireData::Ptr { pointer } => put_str(&mut map, "pointer", pointer)?,
            WireData::Srv {
                service,
                protocol,
                priority,
                weight,
                port,
                target,
            } => {
                put_str(&mut map, "service", service)?;
                put_str(&mut map, "protocol", protocol)?;
                put_uint(&mut map, "priority", *priority)?;
                put_uint(&mut map, "weight", *weight)?;
                if let Some(port) = port {
                    map.serialize_entry("port", port)?;
                }
                put_str(&mut map, "target", target)?;
            }
            WireData::Caa { flag, tag, value } => {
                if let Some(flag) = flag {
                    map.serialize_entry("flag", flag)?;
                }
                put_str(&mut map, "tag", tag)?;
                put_str(&mut map, "value", value)?;
            }
            WireData::Https(binding) | WireData::Svcb(binding) => put_binding(&mut map, binding)?,
            WireData::Unknown { fields, .. } => {
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
            }
        }

        map.end()
    }
}
