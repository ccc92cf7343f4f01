//! Core library for the `weather-proxy` service.
//!
//! This crate defines:
//! - Request/response models and year-range validation
//! - The upstream archive client (Open-Meteo)
//! - Reshaping of the archive's daily arrays into rows
//! - Configuration handling
//!
//! It is used by the `weather-proxy` binary, but the handler can be embedded in any service.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod provider;
pub mod transform;
pub mod validate;

pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::ProxyError;
pub use handler::WeatherProxyHandler;
pub use model::{DailyRow, ErrorBody, HEADER, WeatherRequest, WeatherResponse};
pub use provider::{ArchiveProvider, ArchiveQuery, DailySeries, OpenMeteoArchive};
pub use validate::YearRangeError;
