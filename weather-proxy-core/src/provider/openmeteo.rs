use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::UpstreamConfig,
    error::ProxyError,
    provider::{ArchiveProvider, ArchiveQuery, ArchiveResponse, DAILY_VARIABLES, DailySeries},
};

pub const OPEN_METEO_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Client for the Open-Meteo historical weather archive.
///
/// Makes a single attempt per call. Without a configured timeout a stalled
/// upstream stalls the caller.
#[derive(Debug, Clone)]
pub struct OpenMeteoArchive {
    base_url: String,
    http: Client,
}

impl OpenMeteoArchive {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProxyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            http: builder.build()?,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        Self::new(config.base_url.clone(), config.timeout())
    }
}

/// Error body Open-Meteo sends with 4xx responses.
#[derive(Debug, Deserialize)]
struct OmErrorBody {
    reason: String,
}

#[async_trait]
impl ArchiveProvider for OpenMeteoArchive {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_daily(&self, query: &ArchiveQuery) -> Result<DailySeries, ProxyError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", query.latitude.to_string()),
                ("longitude", query.longitude.to_string()),
                ("start_date", query.start_date.format("%Y-%m-%d").to_string()),
                ("end_date", query.end_date.format("%Y-%m-%d").to_string()),
                ("daily", DAILY_VARIABLES.join(",")),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let url = res.url().clone();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                detail: format!("{status} for url '{url}': {}", upstream_reason(&body)),
            });
        }

        let parsed: ArchiveResponse = serde_json::from_str(&body)?;
        debug!(days = parsed.daily.time.len(), "archive returned daily series");

        Ok(parsed.daily)
    }
}

/// Prefer Open-Meteo's `reason` field, fall back to the raw body.
fn upstream_reason(body: &str) -> String {
    match serde_json::from_str::<OmErrorBody>(body) {
        Ok(err) => err.reason,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
