use async_trait::async_trait;

use crate::error::{BatchResult, ProviderError, Result};
use crate::types::Record;

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Machine-readable error code, when the API sends one.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information available at the call site when mapping an API error
/// (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for create failures.
    pub record_name: Option<String>,
    /// Record ID, for update/delete failures.
    pub record_id: Option<String>,
    /// Zone the operation targeted.
    pub zone: Option<String>,
}

/// Maps raw API errors onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error and log output.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn network_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn timeout_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::Timeout {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for unrecognized error codes.
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone record management.
///
/// All operations are stateless between calls: nothing is cached, and the
/// operations that need current zone contents (`set`, `delete`) re-fetch them
/// from the provider per record, so later records in a batch observe the
/// effects of earlier ones.
///
/// Batches are processed sequentially in input order and are not
/// transactional: a failure partway through aborts the batch and surfaces a
/// [`BatchError`](crate::BatchError) carrying the records already applied.
///
/// Cancellation is cooperative. Dropping a returned future (for example via
/// `tokio::time::timeout`) stops the operation at the next transport call
/// boundary; an in-flight HTTP request is not interrupted mid-call.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Check whether the configured credentials are accepted by the API.
    ///
    /// A rejected credential yields `Ok(false)`, not an error.
    async fn validate_credentials(&self) -> Result<bool>;

    /// List all records in the zone.
    ///
    /// Returns the full record set or the first error; never a partial list.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Create each record in the zone, unconditionally.
    ///
    /// No existence check is performed: appending a value that already exists
    /// creates a second record for it. Returns the input records, each
    /// carrying its provider-assigned id.
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// Update each record in place when a record with the same name, type and
    /// value already exists, otherwise create it.
    ///
    /// An update keeps the matched record's id; a record with the same name
    /// and type but a different value is left alone and a new record is
    /// created instead.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// Delete each record from the zone.
    ///
    /// Deletion is idempotent: a record with no matching name, type and value
    /// in the zone is treated as already deleted, and no delete call is
    /// issued for it. Returns the records processed.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}
