use serde::{Deserialize, Serialize};

// ============ DNS Record Types ============

/// DNS record type discriminator.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// Types without a dedicated variant keep their mnemonic in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
    /// HTTPS service binding record.
    Https,
    /// General service binding record.
    Svcb,
    /// Any other record type, by mnemonic.
    #[serde(untagged)]
    Other(String),
}

impl DnsRecordType {
    /// Uppercase mnemonic as used in zone files and by the remote API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Https => "HTTPS",
            Self::Svcb => "SVCB",
            Self::Other(mnemonic) => mnemonic,
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe representation of DNS record data.
///
/// Each variant carries the fields specific to that record type.
/// Use [`record_type()`](Self::record_type) to get the [`DnsRecordType`] discriminant,
/// or [`display_value()`](Self::display_value) to get the primary value for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record: maps a hostname to an IPv4 address.
    A {
        /// IPv4 address (e.g., `"1.2.3.4"`).
        address: String,
    },

    /// AAAA record: maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address (e.g., `"2001:db8::1"`).
        address: String,
    },

    /// CNAME record: alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// MX record: mail exchange server.
    MX {
        /// Priority (lower = preferred).
        priority: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// TXT record: arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },

    /// NS record: authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// PTR record: reverse lookup pointer.
    PTR {
        /// Pointed-to hostname.
        pointer: String,
    },

    /// SRV record: service locator.
    SRV {
        /// Service label, e.g. `"_sip"`.
        service: String,
        /// Protocol label, e.g. `"_tcp"`.
        protocol: String,
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record: Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },

    /// HTTPS record: service binding for HTTPS origins.
    HTTPS {
        /// `SvcPriority`; 0 selects alias mode.
        priority: u16,
        /// `TargetName`.
        target: String,
        /// `SvcParams` in presentation format, e.g. `alpn=h2,h3`.
        params: String,
    },

    /// SVCB record: general service binding.
    SVCB {
        /// `SvcPriority`; 0 selects alias mode.
        priority: u16,
        /// `TargetName`.
        target: String,
        /// `SvcParams` in presentation format.
        params: String,
    },

    /// Any other record type. Carried through unchanged but never sent to the API.
    ///
    /// Must not carry a type that has its own variant above: an `Other` is always
    /// treated as unsupported, whatever its mnemonic, and its `data` is never parsed.
    Other {
        /// Record type mnemonic, e.g. `"SSHFP"`.
        record_type: String,
        /// RDATA in presentation format.
        data: String,
    },
}

impl RecordData {
    /// Returns the [`DnsRecordType`] discriminant for this record data.
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::AAAA { .. } => DnsRecordType::Aaaa,
            Self::CNAME { .. } => DnsRecordType::Cname,
            Self::MX { .. } => DnsRecordType::Mx,
            Self::TXT { .. } => DnsRecordType::Txt,
            Self::NS { .. } => DnsRecordType::Ns,
            Self::PTR { .. } => DnsRecordType::Ptr,
            Self::SRV { .. } => DnsRecordType::Srv,
            Self::CAA { .. } => DnsRecordType::Caa,
            Self::HTTPS { .. } => DnsRecordType::Https,
            Self::SVCB { .. } => DnsRecordType::Svcb,
            Self::Other { record_type, .. } => DnsRecordType::Other(record_type.to_uppercase()),
        }
    }

    /// Returns the primary display value for this record (e.g., the IP address for A/AAAA,
    /// the target for CNAME/SRV, the exchange for MX).
    pub fn display_value(&self) -> &str {
        match self {
            Self::A { address } | Self::AAAA { address } => address,
            Self::CNAME { target }
            | Self::SRV { target, .. }
            | Self::HTTPS { target, .. }
            | Self::SVCB { target, .. } => target,
            Self::MX { exchange, .. } => exchange,
            Self::TXT { text } => text,
            Self::NS { nameserver } => nameserver,
            Self::PTR { pointer } => pointer,
            Self::CAA { value, .. } => value,
            Self::Other { data, .. } => data,
        }
    }
}

/// A DNS record in a zone, independent of any provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name relative to the zone (e.g., `"www"` or `"@"` for apex).
    pub name: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Type-specific record data.
    pub data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Shorthand for `self.data.record_type()`.
    pub fn record_type(&self) -> DnsRecordType {
        self.data.record_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_record_type_serialize() {
        let json_res = serde_json::to_string(&DnsRecordType::Https);
        assert!(json_res.is_ok(), "serde_json::to_string failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "\"HTTPS\"");
    }

    #[test]
    fn dns_record_type_deserialize_unknown_as_other() {
        let res: serde_json::Result<DnsRecordType> = serde_json::from_str("\"SSHFP\"");
        assert!(res.is_ok(), "serde_json::from_str failed: {res:?}");
        let Ok(t) = res else {
            return;
        };
        assert_eq!(t, DnsRecordType::Other("SSHFP".to_string()));
    }

    #[test]
    fn record_type_display_matches_mnemonic() {
        assert_eq!(DnsRecordType::Aaaa.to_string(), "AAAA");
        assert_eq!(DnsRecordType::Svcb.to_string(), "SVCB");
        assert_eq!(DnsRecordType::Other("LOC".into()).to_string(), "LOC");
    }

    #[test]
    fn record_data_record_type() {
        let cases = [
            (
                RecordData::PTR {
                    pointer: "host.example.com".to_string(),
                },
                DnsRecordType::Ptr,
            ),
            (
                RecordData::Other {
                    record_type: "sshfp".to_string(),
                    data: "1 1 abc".to_string(),
                },
                DnsRecordType::Other("SSHFP".to_string()),
            ),
        ];
        for (data, expected) in cases {
            assert_eq!(data.record_type(), expected);
        }
    }

    #[test]
    fn record_data_display_value() {
        let mx = RecordData::MX {
            priority: 10,
            exchange: "mail.example.com".to_string(),
        };
        let https = RecordData::HTTPS {
            priority: 1,
            target: "cdn.example.net".to_string(),
            params: "alpn=h2".to_string(),
        };
        assert_eq!(mx.display_value(), "mail.example.com");
        assert_eq!(https.display_value(), "cdn.example.net");
    }

    #[test]
    fn record_data_srv_serde_roundtrip() {
        let data = RecordData::SRV {
            service: "_sip".to_string(),
            protocol: "_tcp".to_string(),
            priority: 10,
            weight: 20,
            port: 5060,
            target: "sip.example.com".to_string(),
        };
        let json_res = serde_json::to_string(&data);
        assert!(json_res.is_ok(), "serde_json::to_string failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"type\":\"SRV\""));

        let back_res: serde_json::Result<RecordData> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "serde_json::from_str failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, data);
    }
}
