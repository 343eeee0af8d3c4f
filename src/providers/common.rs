//! Shared provider utilities

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::RecordType;

// ============ HTTP client ============

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client with connect/request timeouts applied.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ Record type conversion ============

/// Parse a wire record type string into [`RecordType`].
pub fn parse_record_type(record_type: &str, provider: &str) -> Result<RecordType> {
    match record_type.to_uppercase().as_str() {
        "A" => Ok(RecordType::A),
        "AAAA" => Ok(RecordType::Aaaa),
        "ALIAS" => Ok(RecordType::Alias),
        "CAA" => Ok(RecordType::Caa),
        "CNAME" => Ok(RecordType::Cname),
        "HTTPS" => Ok(RecordType::Https),
        "MX" => Ok(RecordType::Mx),
        "NS" => Ok(RecordType::Ns),
        "SRV" => Ok(RecordType::Srv),
        "TXT" => Ok(RecordType::Txt),
        _ => Err(ProviderError::UnsupportedRecordType {
            provider: provider.to_string(),
            record_type: record_type.to_string(),
        }),
    }
}

/// Convert a [`RecordType`] to its uppercase wire string.
pub fn record_type_to_string(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::A => "A",
        RecordType::Aaaa => "AAAA",
        RecordType::Alias => "ALIAS",
        RecordType::Caa => "CAA",
        RecordType::Cname => "CNAME",
        RecordType::Https => "HTTPS",
        RecordType::Mx => "MX",
        RecordType::Ns => "NS",
        RecordType::Srv => "SRV",
        RecordType::Txt => "TXT",
    }
}

// ============ Name handling ============

/// Strip the trailing root-label dot from a zone name.
///
/// The Vercel API rejects fully-qualified trailing-dot notation, while
/// zone-management callers conventionally pass zones as FQDNs. Removes at
/// most one trailing `.`; anything else passes through unchanged.
pub fn normalize_zone(zone: &str) -> &str {
    zone.strip_suffix('.').unwrap_or(zone)
}

/// Normalize a record name for comparison: lowercase, at most one trailing
/// dot stripped, with the empty name and `"@"` both meaning the zone apex.
pub fn normalize_record_name(name: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name == "@" {
        "@".to_string()
    } else {
        name.to_ascii_lowercase()
    }
}
