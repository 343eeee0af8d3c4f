//! Vercel API type definitions

use serde::{Deserialize, Serialize};

/// A DNS record as returned by the Vercel API.
///
/// Every value in a zone is its own wire record with its own `id`, even when
/// several share a name and type. SRV records may carry the structured
/// [`srv`](Self::srv) object, a flat `"priority weight port target"` value
/// string, or both, depending on API version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VercelRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    /// MX priority. Newer API versions send `mxPriority`, older ones
    /// `priority`.
    #[serde(default)]
    pub mx_priority: Option<u16>,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(default)]
    pub srv: Option<VercelSrvData>,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update time, epoch milliseconds.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Structured SRV data, used in create/update payloads and present on some
/// SRV record responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VercelSrvData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub target: String,
}

/// Create/update request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VercelRecordPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srv: Option<VercelSrvData>,
}

/// Response envelope for the record listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListRecordsResponse {
    pub records: Vec<VercelRecord>,
    #[serde(default)]
    pub pagination: Option<VercelPagination>,
}

/// Cursor-based pagination metadata. `next` is a timestamp passed back via
/// the `until` query parameter; `null` marks the last page.
#[derive(Debug, Deserialize)]
pub(crate) struct VercelPagination {
    #[serde(default)]
    pub next: Option<i64>,
}

/// Response to a record creation call. The API returns only the assigned id.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateRecordResponse {
    pub uid: String,
}

/// Error envelope wrapping every non-2xx response body.
#[derive(Debug, Deserialize)]
pub(crate) struct VercelErrorEnvelope {
    pub error: VercelApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VercelApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}
