use chrono::{Datelike, Local};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::{
    error::ProxyError,
    model::{WeatherRequest, WeatherResponse},
    provider::{ArchiveProvider, ArchiveQuery},
    transform::reshape,
};

/// Validates a request, fetches the archive and reshapes the result.
///
/// Holds no per-request state, so one instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct WeatherProxyHandler {
    provider: Arc<dyn ArchiveProvider>,
}

impl WeatherProxyHandler {
    pub fn new(provider: Arc<dyn ArchiveProvider>) -> Self {
        Self { provider }
    }

    /// Run one request against the local clock's current year.
    pub async fn handle(&self, request: &WeatherRequest) -> Result<WeatherResponse, ProxyError> {
        self.handle_at(request, Local::now().year()).await
    }

    #[instrument(skip(self), level = "info")]
    pub async fn handle_at(
        &self,
        request: &WeatherRequest,
        current_year: i32,
    ) -> Result<WeatherResponse, ProxyError> {
        let result = self.run(request, current_year).await;

        match &result {
            Ok(response) => debug!(rows = response.value.len(), "weather request served"),
            Err(err @ ProxyError::Validation(_)) => debug!(%err, "rejected weather request"),
            Err(err @ ProxyError::Upstream { .. }) => warn!(%err, "upstream archive failed"),
            Err(err @ ProxyError::Internal(_)) => error!(%err, "weather request failed"),
        }

        result
    }

    async fn run(
        &self,
        request: &WeatherRequest,
        current_year: i32,
    ) -> Result<WeatherResponse, ProxyError> {
        request.validate(current_year)?;

        let query = ArchiveQuery::for_request(request)?;
        let daily = self.provider.fetch_daily(&query).await?;
        let rows = reshape(&daily)?;

        Ok(WeatherResponse::new(rows))
    }
}
