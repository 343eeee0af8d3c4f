//! Vercel HTTP request plumbing
//!
//! Single-request helpers: build the URL (team scope included), attach the
//! bearer token, send, and turn non-2xx responses into [`ProviderError`]s.
//! There is deliberately no retry or backoff here; every failure surfaces
//! immediately to the batch orchestration above.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{VercelErrorEnvelope, VercelProvider};

/// Response bodies longer than this are truncated in debug logs.
const LOG_BODY_LIMIT: usize = 256;

fn truncate_for_log(s: &str) -> &str {
    if s.len() <= LOG_BODY_LIMIT {
        return s;
    }
    let mut end = LOG_BODY_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

impl VercelProvider {
    /// Build a full request URL, attaching the team scope when configured.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(team_id) = &self.team_id {
            url.push(if path.contains('?') { '&' } else { '?' });
            url.push_str("teamId=");
            url.push_str(&urlencoding::encode(team_id));
        }
        url
    }

    /// Send one request and return the response body, mapping transport
    /// failures and non-2xx statuses to [`ProviderError`].
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        path: &str,
        context: ErrorContext,
    ) -> Result<String> {
        log::debug!("[{}] {method} {path}", self.provider_name());

        let response = request
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error(e)
                } else {
                    self.network_error(e)
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("[{}] response status: {status}", self.provider_name());

        // Read Retry-After before the body consumes the response.
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response body: {e}")))?;

        log::debug!(
            "[{}] response body: {}",
            self.provider_name(),
            truncate_for_log(&body)
        );

        if status == 429 {
            log::warn!(
                "[{}] rate limited (HTTP 429), retry_after={retry_after:?}",
                self.provider_name()
            );
            return Err(ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        // 5xx gateway responses carry no usable error envelope.
        if matches!(status, 502..=504) {
            log::warn!("[{}] server error (HTTP {status})", self.provider_name());
            return Err(self.network_error(format!("HTTP {status}: {body}")));
        }

        if !(200..300).contains(&status) {
            let raw = match serde_json::from_str::<VercelErrorEnvelope>(&body) {
                Ok(envelope) => match envelope.error.code {
                    Some(code) => RawApiError::with_code(code, envelope.error.message),
                    None => RawApiError::new(envelope.error.message),
                },
                Err(_) => RawApiError::new(format!("HTTP {status}: {body}")),
            };
            let mapped = self.map_error(raw, context);
            if mapped.is_expected() {
                log::warn!("[{}] API error: {mapped}", self.provider_name());
            } else {
                log::error!("[{}] API error: {mapped}", self.provider_name());
            }
            return Err(mapped);
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{}] JSON parse failed: {e}", self.provider_name());
            log::error!(
                "[{}] raw response: {}",
                self.provider_name(),
                truncate_for_log(body)
            );
            self.parse_error(e)
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.endpoint(path);
        let body = self
            .execute(self.client.get(&url), "GET", path, context)
            .await?;
        self.decode(&body)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.endpoint(path);
        let response_body = self
            .execute(self.client.post(&url).json(body), "POST", path, context)
            .await?;
        self.decode(&response_body)
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.endpoint(path);
        let response_body = self
            .execute(self.client.patch(&url).json(body), "PATCH", path, context)
            .await?;
        self.decode(&response_body)
    }

    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = self.endpoint(path);
        self.execute(self.client.delete(&url), "DELETE", path, context)
            .await?;
        Ok(())
    }
}
