//! Vercel error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::VercelProvider;

/// Vercel error code mapping
/// Reference: <https://vercel.com/docs/rest-api/errors>
impl ProviderErrorMapper for VercelProvider {
    fn provider_name(&self) -> &'static str {
        "vercel"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Token rejected outright
            // forbidden: token invalid, expired or revoked
            // unauthorized: request carried no usable credential
            Some("forbidden" | "unauthorized" | "invalid_token") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Token valid but not allowed to touch the resource
            // team_unauthorized: token not authorized for the teamId scope
            Some("team_unauthorized" | "insufficient_permissions" | "not_authorized") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Duplicate record rejected by the API (e.g. a second CNAME for
            // the same name)
            Some("conflict" | "record_exists") => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // not_found covers both missing records and missing zones; the
            // call-site context says which one was addressed.
            Some("not_found" | "record_not_found") => match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                },
            },

            Some("domain_not_found") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("rate_limited") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Request body rejected
            // bad_request: general validation failure
            // invalid_name / invalid_ttl / invalid_value: field-specific
            Some(
                code @ ("bad_request" | "invalid_record" | "invalid_name" | "invalid_ttl"
                | "invalid_value" | "invalid_type"),
            ) => {
                let param = match code {
                    "invalid_name" => "name",
                    "invalid_ttl" => "ttl",
                    "invalid_value" => "value",
                    "invalid_type" => "type",
                    _ => "general",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}
