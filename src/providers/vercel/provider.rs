//! Vercel DnsProvider trait implementation

use async_trait::async_trait;
use chrono::DateTime;

use crate::error::{BatchError, BatchOperation, BatchResult, Result};
use crate::providers::common::{
    normalize_record_name, normalize_zone, parse_record_type, record_type_to_string,
};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{Record, RecordType};

use super::{
    CreateRecordResponse, LIST_PAGE_LIMIT, ListRecordsResponse, VercelProvider, VercelRecord,
    VercelRecordPayload, VercelSrvData,
};

/// Parse an SRV value in the flat `"priority weight port target"` form the
/// API uses on some responses. Anything else is passed through as the target
/// with no service metadata.
fn parse_srv_value(value: &str) -> (String, Option<u16>, Option<u16>, Option<u16>) {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() == 4 {
        if let (Ok(priority), Ok(weight), Ok(port)) =
            (parts[0].parse(), parts[1].parse(), parts[2].parse())
        {
            return (parts[3].to_string(), Some(priority), Some(weight), Some(port));
        }
    }
    (value.to_string(), None, None, None)
}

/// Strip the surrounding double quotes the API puts on some TXT values, so
/// the caller-facing value is the raw text content.
fn unquote_txt(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        value
    }
}

/// The caller-facing value of a wire record, for locator comparison.
fn wire_value(record: &VercelRecord) -> String {
    if record.record_type.eq_ignore_ascii_case("SRV") {
        if let Some(srv) = &record.srv {
            return srv.target.clone();
        }
        return parse_srv_value(&record.value).0;
    }
    if record.record_type.eq_ignore_ascii_case("TXT") {
        return unquote_txt(&record.value).to_string();
    }
    record.value.clone()
}

/// Value comparison, tolerant of a trailing root-label dot on either side.
fn values_equal(a: &str, b: &str) -> bool {
    a.strip_suffix('.').unwrap_or(a) == b.strip_suffix('.').unwrap_or(b)
}

impl VercelProvider {
    /// Build the create/update request body for a record.
    ///
    /// MX priority and SRV service data move into the structured fields the
    /// API expects; every other type sends a flat value. A zero TTL is
    /// omitted so the provider applies its default.
    fn record_to_payload(record: &Record) -> VercelRecordPayload {
        let record_type = record_type_to_string(record.record_type).to_string();
        let ttl = (record.ttl > 0).then_some(record.ttl);
        match record.record_type {
            RecordType::Mx => VercelRecordPayload {
                name: record.name.clone(),
                record_type,
                value: Some(record.value.clone()),
                ttl,
                mx_priority: Some(record.priority.unwrap_or(0)),
                srv: None,
            },
            RecordType::Srv => VercelRecordPayload {
                name: record.name.clone(),
                record_type,
                value: None,
                ttl,
                mx_priority: None,
                srv: Some(VercelSrvData {
                    priority: Some(record.priority.unwrap_or(0)),
                    weight: Some(record.weight.unwrap_or(0)),
                    port: Some(record.port.unwrap_or(0)),
                    target: record.value.clone(),
                }),
            },
            _ => VercelRecordPayload {
                name: record.name.clone(),
                record_type,
                value: Some(record.value.clone()),
                ttl,
                mx_priority: None,
                srv: None,
            },
        }
    }

    /// Convert a wire record to a [`Record`].
    ///
    /// Missing optional service fields become `None`, never an error. SRV
    /// responses are accepted in either the structured or the flat form.
    fn record_from_wire(&self, wire: VercelRecord) -> Result<Record> {
        let record_type = parse_record_type(&wire.record_type, self.provider_name())?;
        let created_at = wire.created_at.and_then(DateTime::from_timestamp_millis);
        let updated_at = wire.updated_at.and_then(DateTime::from_timestamp_millis);

        let (value, priority, weight, port) = match record_type {
            RecordType::Mx => (wire.value, wire.mx_priority.or(wire.priority), None, None),
            RecordType::Srv => match wire.srv {
                Some(srv) => (srv.target, srv.priority, srv.weight, srv.port),
                None => parse_srv_value(&wire.value),
            },
            RecordType::Txt => (unquote_txt(&wire.value).to_string(), None, None, None),
            _ => (wire.value, None, None, None),
        };

        Ok(Record {
            id: wire.id,
            name: wire.name,
            record_type,
            value,
            ttl: wire.ttl.unwrap_or(0),
            priority,
            weight,
            port,
            created_at,
            updated_at,
        })
    }

    /// Find the wire record matching a target record in freshly fetched zone
    /// contents.
    ///
    /// A match requires equal normalized name, equal type and equal value:
    /// the API assigns every value its own record id even when several share
    /// a name and type, so matching on name and type alone could address the
    /// wrong entry. Ties are resolved by provider order, first match wins.
    fn find_record<'a>(
        existing: &'a [VercelRecord],
        target: &Record,
    ) -> Option<&'a VercelRecord> {
        let name = normalize_record_name(&target.name);
        let record_type = record_type_to_string(target.record_type);
        existing.iter().find(|candidate| {
            candidate.record_type.eq_ignore_ascii_case(record_type)
                && normalize_record_name(&candidate.name) == name
                && values_equal(&wire_value(candidate), &target.value)
        })
    }

    /// Fetch every record in the zone, following the pagination cursor.
    async fn fetch_all_records(&self, zone: &str) -> Result<Vec<VercelRecord>> {
        let mut records = Vec::new();
        let mut until: Option<i64> = None;
        loop {
            let mut path = format!(
                "/v4/domains/{}/records?limit={LIST_PAGE_LIMIT}",
                urlencoding::encode(zone)
            );
            if let Some(cursor) = until {
                path.push_str(&format!("&until={cursor}"));
            }
            let context = ErrorContext {
                zone: Some(zone.to_string()),
                ..ErrorContext::default()
            };
            let page: ListRecordsResponse = self.get_json(&path, context).await?;
            let page_len = page.records.len();
            records.extend(page.records);
            until = match page.pagination.and_then(|p| p.next) {
                // An empty page with a cursor would loop forever; stop.
                Some(next) if page_len > 0 => Some(next),
                _ => break,
            };
        }
        Ok(records)
    }

    /// Create one record. The API returns only the assigned id, so the
    /// result is the input record carrying it.
    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let payload = Self::record_to_payload(record);
        let context = ErrorContext {
            record_name: Some(record.name.clone()),
            zone: Some(zone.to_string()),
            ..ErrorContext::default()
        };
        let created: CreateRecordResponse = self
            .post_json(
                &format!("/v2/domains/{}/records", urlencoding::encode(zone)),
                &payload,
                context,
            )
            .await?;

        let mut result = record.clone();
        result.id = created.uid;
        Ok(result)
    }

    /// Update the record addressed by `record_id` in place.
    async fn update_record(&self, record_id: &str, record: &Record) -> Result<Record> {
        let payload = Self::record_to_payload(record);
        let context = ErrorContext {
            record_name: Some(record.name.clone()),
            record_id: Some(record_id.to_string()),
            ..ErrorContext::default()
        };
        let updated: VercelRecord = self
            .patch_json(
                &format!("/v1/domains/records/{record_id}"),
                &payload,
                context,
            )
            .await?;
        self.record_from_wire(updated)
    }

    /// Update in place when the record already exists, create otherwise.
    async fn set_one(&self, zone: &str, record: &Record) -> Result<Record> {
        let existing = self.fetch_all_records(zone).await?;
        match Self::find_record(&existing, record) {
            Some(matched) => {
                let record_id = matched.id.clone();
                self.update_record(&record_id, record).await
            }
            None => self.create_record(zone, record).await,
        }
    }

    /// Delete the matching record if it exists; absence is success.
    async fn delete_one(&self, zone: &str, record: &Record) -> Result<()> {
        let existing = self.fetch_all_records(zone).await?;
        let Some(matched) = Self::find_record(&existing, record) else {
            log::debug!(
                "[{}] record '{}' already absent from zone '{zone}', nothing to delete",
                self.provider_name(),
                record.name
            );
            return Ok(());
        };
        let context = ErrorContext {
            record_name: Some(record.name.clone()),
            record_id: Some(matched.id.clone()),
            zone: Some(zone.to_string()),
        };
        self.delete(
            &format!(
                "/v2/domains/{}/records/{}",
                urlencoding::encode(zone),
                matched.id
            ),
            context,
        )
        .await
    }
}

#[async_trait]
impl DnsProvider for VercelProvider {
    fn id(&self) -> &'static str {
        "vercel"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self
            .get_json::<serde_json::Value>("/v2/user", ErrorContext::default())
            .await
        {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = normalize_zone(zone);
        let wire = self.fetch_all_records(zone).await?;
        wire.into_iter()
            .map(|record| self.record_from_wire(record))
            .collect()
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone(zone);
        let mut appended = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.create_record(zone, record).await {
                Ok(created) => appended.push(created),
                Err(source) => {
                    return Err(BatchError {
                        operation: BatchOperation::Append,
                        index,
                        record_name: record.name.clone(),
                        completed: appended,
                        source,
                    });
                }
            }
        }
        Ok(appended)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone(zone);
        let mut set = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.set_one(zone, record).await {
                Ok(result) => set.push(result),
                Err(source) => {
                    return Err(BatchError {
                        operation: BatchOperation::Set,
                        index,
                        record_name: record.name.clone(),
                        completed: set,
                        source,
                    });
                }
            }
        }
        Ok(set)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone(zone);
        let mut deleted = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.delete_one(zone, record).await {
                Ok(()) => deleted.push(record.clone()),
                Err(source) => {
                    return Err(BatchError {
                        operation: BatchOperation::Delete,
                        index,
                        record_name: record.name.clone(),
                        completed: deleted,
                        source,
                    });
                }
            }
        }
        Ok(deleted)
    }
}
