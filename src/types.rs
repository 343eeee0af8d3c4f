use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DNS record type accepted by the Vercel API.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Vercel's CNAME-at-apex alias record.
    Alias,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// HTTPS service binding record.
    Https,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
}

/// A single DNS record value, provider-agnostic.
///
/// One `Record` represents exactly one value: a zone holding three MX targets
/// holds three `Record`s, each addressed by its own provider-assigned
/// [`id`](Self::id). Names are relative to the zone (`"www"`, or `"@"`/`""`
/// for the apex), never fully qualified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Provider-assigned identifier. Empty until the record has been created;
    /// the only stable handle for updating or deleting a specific value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Record name, relative to the zone.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record value: the address for A/AAAA, target hostname for
    /// CNAME/ALIAS/MX/SRV, raw text content for TXT.
    pub value: String,
    /// Time to live in seconds. `0` lets the provider apply its default.
    #[serde(default)]
    pub ttl: u32,
    /// MX or SRV priority (lower = preferred).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// SRV weight for load balancing among same-priority targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// SRV TCP/UDP port number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// When the record was created, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Create a record with no id, no service metadata and no timestamps.
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            record_type,
            value: value.into(),
            ttl,
            priority: None,
            weight: None,
            port: None,
            created_at: None,
            updated_at: None,
        }
    }
}
