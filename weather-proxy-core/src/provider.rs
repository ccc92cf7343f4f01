use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{error::ProxyError, model::WeatherRequest};

pub mod openmeteo;

pub use openmeteo::OpenMeteoArchive;

/// Daily variables requested from the archive, in response column order.
pub const DAILY_VARIABLES: [&str; 3] = ["temperature_2m_max", "temperature_2m_min", "precipitation_sum"];

/// What to ask the archive for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchiveQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ArchiveQuery {
    /// Cover whole years: January 1st of the start year to December 31st of the end year.
    pub fn for_request(request: &WeatherRequest) -> Result<Self, ProxyError> {
        let start_date = NaiveDate::from_ymd_opt(request.start_year, 1, 1)
            .ok_or_else(|| ProxyError::Internal(format!("invalid start year {}", request.start_year)))?;
        let end_date = NaiveDate::from_ymd_opt(request.end_year, 12, 31)
            .ok_or_else(|| ProxyError::Internal(format!("invalid end year {}", request.end_year)))?;

        Ok(Self {
            latitude: request.lat,
            longitude: request.lon,
            start_date,
            end_date,
        })
    }
}

/// Body of a successful archive response. Only `daily` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    pub daily: DailySeries,
}

/// Parallel per-day arrays as returned by the archive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
}

/// Source of historical daily weather.
#[async_trait]
pub trait ArchiveProvider: Send + Sync + Debug {
    async fn fetch_daily(&self, query: &ArchiveQuery) -> Result<DailySeries, ProxyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_spans_whole_years() {
        let req = WeatherRequest { lon: 105.85, lat: 21.02, start_year: 2020, end_year: 2023 };

        let query = ArchiveQuery::for_request(&req).unwrap();

        assert_eq!(query.start_date.to_string(), "2020-01-01");
        assert_eq!(query.end_date.to_string(), "2023-12-31");
        assert_eq!(query.latitude, 21.02);
        assert_eq!(query.longitude, 105.85);
    }

    #[test]
    fn archive_response_requires_daily() {
        let err = serde_json::from_str::<ArchiveResponse>(r#"{"latitude": 21.0}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `daily`"));
    }

    #[test]
    fn daily_series_accepts_nulls() {
        let parsed: ArchiveResponse = serde_json::from_str(
            r#"{"daily": {
                "time": ["2020-01-01"],
                "temperature_2m_max": [null],
                "temperature_2m_min": [1.5],
                "precipitation_sum": [0]
            }}"#,
        )
        .unwrap();

        assert_eq!(parsed.daily.temperature_2m_max, vec![None]);
        assert_eq!(parsed.daily.temperature_2m_min, vec![Some(1.5)]);
        assert_eq!(parsed.daily.precipitation_sum, vec![Some(0.0)]);
    }
}
