use serde::{Deserialize, Serialize};

/// Unified error type for all record operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Per-field anomalies inside a wire record never surface here; they are reported as
/// decode diagnostics instead. Everything below aborts the whole operation, and nothing
/// is retried.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// API key or API secret is empty. Raised before any request is sent.
    #[error("[{provider}] API key and secret are required")]
    MissingCredentials {
        /// Provider that produced the error.
        provider: String,
    },

    /// The request could not be built (body serialization, invalid URL, ...).
    #[error("[{provider}] Failed to build request: {detail}")]
    RequestBuildError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the transport timeout.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a status code >= 400.
    #[error("[{provider}] API request failed with status {status}: {body}")]
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response envelope was not valid JSON of the expected shape.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A record type has no wire representation (raised by deletion only).
    #[error("[{provider}] Unsupported record type for deletion: {record_type}")]
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// Mnemonic of the offending record type.
        record_type: String,
    },
}

impl ProviderError {
    /// Whether the error is caused by the caller's input rather than by the
    /// network or the remote service.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingCredentials { .. } | Self::UnsupportedRecordType { .. } => true,
            Self::ApiError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Provider identifier carried by every variant.
    pub fn provider(&self) -> &str {
        match self {
            Self::MissingCredentials { provider }
            | Self::RequestBuildError { provider, .. }
            | Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::UnsupportedRecordType { provider, .. } => provider,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_credentials() {
        let e = ProviderError::MissingCredentials {
            provider: "spaceship".to_string(),
        };
        assert_eq!(e.to_string(), "[spaceship] API key and secret are required");
    }

    #[test]
    fn display_api_error_includes_status_and_body() {
        let e = ProviderError::ApiError {
            provider: "spaceship".to_string(),
            status: 422,
            body: r#"{"detail":"invalid ttl"}"#.to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"[spaceship] API request failed with status 422: {"detail":"invalid ttl"}"#
        );
    }

    #[test]
    fn display_unsupported_record_type() {
        let e = ProviderError::UnsupportedRecordType {
            provider: "spaceship".to_string(),
            record_type: "LOC".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[spaceship] Unsupported record type for deletion: LOC"
        );
    }

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            provider: "test".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_parse_error() {
        let e = ProviderError::ParseError {
            provider: "test".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Parse error: bad json");
    }

    #[test]
    fn expected_classification() {
        let client_side = ProviderError::ApiError {
            provider: "t".into(),
            status: 404,
            body: String::new(),
        };
        let server_side = ProviderError::ApiError {
            provider: "t".into(),
            status: 500,
            body: String::new(),
        };
        let network = ProviderError::NetworkError {
            provider: "t".into(),
            detail: "d".into(),
        };
        assert!(client_side.is_expected());
        assert!(!server_side.is_expected());
        assert!(!network.is_expected());
        assert!(
            ProviderError::MissingCredentials {
                provider: "t".into()
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_tags_variant_with_code() {
        let e = ProviderError::ApiError {
            provider: "spaceship".to_string(),
            status: 401,
            body: "unauthorized".to_string(),
        };
        let json_res = serde_json::to_string(&e);
        assert!(json_res.is_ok(), "serde_json::to_string failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"code\":\"ApiError\""));
        assert!(json.contains("\"status\":401"));
    }

    #[test]
    fn deserialize_round_trip_keeps_message() {
        let original = ProviderError::UnsupportedRecordType {
            provider: "spaceship".to_string(),
            record_type: "SSHFP".to_string(),
        };
        let json_res = serde_json::to_string(&original);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        let back_res: serde_json::Result<ProviderError> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "deserialize failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back.to_string(), original.to_string());
        assert_eq!(back.provider(), "spaceship");
    }
}
