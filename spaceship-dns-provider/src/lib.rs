//! # spaceship-dns-provider
//!
//! A DNS record client for the [Spaceship](https://www.spaceship.com/) DNS API,
//! built around a provider-agnostic record model.
//!
//! The crate has three layers:
//!
//! - a **wire codec** for Spaceship's flattened record JSON, tolerant on decode:
//!   a field with an unexpected type is skipped and logged, not fatal;
//! - a **translator** between the wire form and the generic [`Record`];
//! - a **record manager**, [`SpaceshipProvider`], implementing
//!   [`DnsRecordProvider`]: list (auto-paginated), append, set and delete.
//!
//! Only [`Record`] crosses the public API; the wire form stays internal:
//!
//! ```compile_fail
//! use spaceship_dns_provider::WireRecord;
//! ```
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spaceship_dns_provider::{DnsRecordProvider, Record, RecordData, SpaceshipProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SpaceshipProvider::new("api-key".to_string(), "api-secret".to_string());
//!
//!     // List every record in the zone (pages are fetched transparently)
//!     for record in provider.get_records("example.com.").await? {
//!         println!(
//!             "{} {} {} -> {}",
//!             record.name,
//!             record.ttl,
//!             record.record_type(),
//!             record.data.display_value()
//!         );
//!     }
//!
//!     // Create or overwrite a record
//!     let www = Record::new("www", 300, RecordData::A { address: "192.0.2.1".to_string() });
//!     provider.set_records("example.com", &[www]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`SpaceshipConfig`] can be deserialized from any serde format and/or filled from
//! `LIBDNS_SPACESHIP_APIKEY`, `LIBDNS_SPACESHIP_APISECRET`, `LIBDNS_SPACESHIP_BASEURL`,
//! `LIBDNS_SPACESHIP_PAGESIZE` and `LIBDNS_SPACESHIP_TIMEOUT`:
//!
//! ```rust,no_run
//! use spaceship_dns_provider::{SpaceshipConfig, SpaceshipProvider};
//!
//! let provider = SpaceshipProvider::from_config(SpaceshipConfig::from_env());
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried; the first failure aborts the operation:
//!
//! - [`ProviderError::MissingCredentials`]: key or secret is empty (no request sent)
//! - [`ProviderError::ApiError`]: the API answered with a status >= 400
//! - [`ProviderError::UnsupportedRecordType`]: a record to delete has no Spaceship form
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Records that Spaceship cannot represent are silently skipped when listing and
//! dropped (with a `warn` log) by append and set.

mod config;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export configuration
pub use config::{
    ENV_API_KEY, ENV_API_SECRET, ENV_BASE_URL, ENV_PAGE_SIZE, ENV_TIMEOUT, SpaceshipConfig,
};

// Re-export traits
pub use traits::{DnsRecordProvider, HttpRequest, HttpResponse, Transport};

// Re-export the default transport
pub use http_client::ReqwestTransport;

// Re-export types
pub use types::{DnsRecordType, Record, RecordData};

// Re-export the Spaceship provider
pub use providers::{SpaceshipProvider, SpaceshipProviderBuilder};
