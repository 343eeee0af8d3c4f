//! Vercel DNS provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{
    CreateRecordResponse, ListRecordsResponse, VercelErrorEnvelope, VercelRecord,
    VercelRecordPayload, VercelSrvData,
};

pub(crate) const VERCEL_API_BASE: &str = "https://api.vercel.com";
/// Records fetched per page when enumerating a zone.
pub(crate) const LIST_PAGE_LIMIT: u32 = 100;

/// Vercel DNS provider.
///
/// Authenticates with a bearer token. When the zone lives under a Vercel
/// team rather than a personal scope, set the team identifier with
/// [`with_team_id`](Self::with_team_id); it is attached to every API call as
/// a `teamId` query parameter.
pub struct VercelProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) team_id: Option<String>,
    pub(crate) base_url: String,
}

impl VercelProvider {
    /// Create a provider using the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            api_token: api_token.into(),
            team_id: None,
            base_url: VERCEL_API_BASE.to_string(),
        }
    }

    /// Scope all API calls to a team.
    #[must_use]
    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Override the API base URL. Intended for tests that point the provider
    /// at a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
