//! `Record` 与 Spaceship 记录之间的转换
//!
//! 两个方向都返回 `Option`：`None` 表示该类型无法表示，由调用方决定跳过还是报错。

use crate::providers::common::normalize_record_name;
use crate::types::{Record, RecordData};

use super::types::{ServiceBinding, SrvPort, SvcTargetKey, WireData, WireRecord};

/// Spaceship 记录 → `Record`
pub(crate) fn wire_to_record(wire: WireRecord) -> Option<Record> {
    let data = match wire.data {
        WireData::A { address } => RecordData::A { address },
        WireData::Aaaa { address } => RecordData::AAAA { address },
        WireData::Cname { cname } => RecordData::CNAME { target: cname },
        WireData::Mx {
            exchange,
            preference,
        } => RecordData::MX {
            priority: preference,
            exchange,
        },
        WireData::Txt { value } => RecordData::TXT { text: value },
        WireData::Ns { nameserver } => RecordData::NS { nameserver },
        WireData::Ptr { pointer } => RecordData::PTR { pointer },
        WireData::Srv {
            service,
            protocol,
            priority,
            weight,
            port,
            target,
        } => RecordData::SRV {
            service,
            protocol,
            priority,
            weight,
            port: port.and_then(|p| p.normalized).unwrap_or_default(),
            target,
        },
        WireData::Caa { flag, tag, value } => RecordData::CAA {
            flags: flag.unwrap_or_default(),
            tag,
            value,
        },
        WireData::Https(binding) => RecordData::HTTPS {
            priority: binding.svc_priority,
            target: binding.target,
            params: binding.svc_params,
        },
        WireData::Svcb(binding) => RecordData::SVCB {
            priority: binding.svc_priority,
            target: binding.target,
            params: binding.svc_params,
        },
        WireData::Unknown { .. } => return None,
    };

    Some(Record {
        name: wire.name,
        ttl: wire.ttl,
        data,
    })
}

fn binding(priority: u16, target: &str, params: &str) -> ServiceBinding {
    ServiceBinding {
        svc_priority: priority,
        target: target.to_string(),
        target_key: SvcTargetKey::SvcTarget,
        svc_params: params.to_string(),
    }
}

/// `Record` → Spaceship 记录
///
/// 名称按 zone 规范化（绝对名称转相对，空名称转 `@`）。
pub(crate) fn record_to_wire(record: &Record, zone: &str) -> Option<WireRecord> {
    let data = match &record.data {
        RecordData::A { address } => WireData::A {
            address: address.clone(),
        },
        RecordData::AAAA { address } => WireData::Aaaa {
            address: address.clone(),
        },
        RecordData::CNAME { target } => WireData::Cname {
            cname: target.clone(),
        },
        RecordData::MX { priority, exchange } => WireData::Mx {
            exchange: exchange.clone(),
            preference: *priority,
        },
        RecordData::TXT { text } => WireData::Txt { value: text.clone() },
        RecordData::NS { nameserver } => WireData::Ns {
            nameserver: nameserver.clone(),
        },
        RecordData::PTR { pointer } => WireData::Ptr {
            pointer: pointer.clone(),
        },
        RecordData::SRV {
            service,
            protocol,
            priority,
            weight,
            port,
            target,
        } => WireData::Srv {
            service: service.clone(),
            protocol: protocol.clone(),
            priority: *priority,
            weight: *weight,
            port: Some(SrvPort::from_number(*port)),
            target: target.clone(),
        },
        RecordData::CAA { flags, tag, value } => WireData::Caa {
            flag: Some(*flags),
            tag: tag.clone(),
            value: value.clone(),
        },
        RecordData::HTTPS {
            priority,
            target,
            params,
        } => WireData::Https(binding(*priority, target, params)),
        RecordData::SVCB {
            priority,
            target,
            params,
        } => WireData::Svcb(binding(*priority, target, params)),
        RecordData::Other { .. } => return None,
    };

    Some(WireRecord {
        name: normalize_record_name(&record.name, zone),
        ttl: record.ttl,
        data,
    })
}
