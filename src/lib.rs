//! # vercel-dns-provider
//!
//! A Rust client for managing DNS records hosted on [Vercel](https://vercel.com/docs/rest-api),
//! built for DNS-automation systems (ACME certificate issuance, dynamic DNS)
//! that operate on zones through a small, provider-agnostic record interface.
//!
//! | Operation | Endpoint | Semantics |
//! |-----------|----------|-----------|
//! | [`get_records`](DnsProvider::get_records) | `GET /v4/domains/{zone}/records` | full zone listing |
//! | [`append_records`](DnsProvider::append_records) | `POST /v2/domains/{zone}/records` | unconditional create |
//! | [`set_records`](DnsProvider::set_records) | `PATCH /v1/domains/records/{id}` or create | update in place, create when absent |
//! | [`delete_records`](DnsProvider::delete_records) | `DELETE /v2/domains/{zone}/records/{id}` | idempotent delete |
//!
//! Zones may be passed as FQDNs (`"example.com."`); the trailing root-label
//! dot is stripped before any API call, since the Vercel API rejects
//! fully-qualified notation.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vercel_dns_provider::{DnsProvider, Record, RecordType, VercelProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Team-owned zones additionally need `.with_team_id("team_...")`.
//!     let provider = VercelProvider::new("your-api-token");
//!
//!     // List everything in the zone.
//!     for record in provider.get_records("example.com.").await? {
//!         println!("{} {:?} -> {} (id {})", record.name, record.record_type, record.value, record.id);
//!     }
//!
//!     // Create a record; the result carries the provider-assigned id.
//!     let created = provider
//!         .append_records(
//!             "example.com",
//!             &[Record::new("www", RecordType::A, "192.0.2.1", 300)],
//!         )
//!         .await?;
//!     println!("created with id {}", created[0].id);
//!
//!     // Upsert and idempotent delete.
//!     provider
//!         .set_records(
//!             "example.com",
//!             &[Record::new("www", RecordType::A, "192.0.2.1", 600)],
//!         )
//!         .await?;
//!     provider
//!         .delete_records(
//!             "example.com",
//!             &[Record::new("www", RecordType::A, "192.0.2.1", 600)],
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Semantics
//!
//! [`append_records`](DnsProvider::append_records),
//! [`set_records`](DnsProvider::set_records) and
//! [`delete_records`](DnsProvider::delete_records) process their batch
//! sequentially in input order and are **not transactional**: a failure
//! partway through aborts the batch and returns a [`BatchError`] carrying
//! the records already applied (which stay applied) together with the
//! underlying [`ProviderError`]. Callers own retry and reconciliation of the
//! remainder — nothing is retried or rolled back internally.
//!
//! ## Error Handling
//!
//! Single-record operations return [`Result<T, ProviderError>`](ProviderError)
//! with structured variants for the common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`] — token rejected
//! - [`ProviderError::RecordNotFound`] / [`ProviderError::DomainNotFound`]
//! - [`ProviderError::RateLimited`] — HTTP 429, with the API's suggested
//!   `retry_after` surfaced as-is
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]
//!
//! Deleting a record that is already absent is success, not an error.

mod error;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{BatchError, BatchOperation, BatchResult, ProviderError, Result};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{Record, RecordType};

// Re-export the provider
pub use providers::VercelProvider;
