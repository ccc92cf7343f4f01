use serde::{Deserialize, Serialize};

/// Column names of every [`WeatherResponse`], in row order.
pub const HEADER: [&str; 7] = ["day", "month", "year", "doy", "max_temp", "min_temp", "precip"];

/// Inbound request body of `POST /weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub lon: f64,
    pub lat: f64,
    pub start_year: i32,
    pub end_year: i32,
}

/// One reshaped day of archive data.
///
/// Serialized as a 7-element array matching [`HEADER`], e.g.
/// `[1, 1, 2020, 1, 10.0, 1.0, 0.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RowTuple", into = "RowTuple")]
pub struct DailyRow {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// Sequential position in the series, starting at 1. Only equals the
    /// calendar day-of-year when the series starts on January 1st with no gaps.
    pub doy: u32,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub precip: Option<f64>,
}

type RowTuple = (u32, u32, i32, u32, Option<f64>, Option<f64>, Option<f64>);

impl From<RowTuple> for DailyRow {
    fn from((day, month, year, doy, max_temp, min_temp, precip): RowTuple) -> Self {
        Self { day, month, year, doy, max_temp, min_temp, precip }
    }
}

impl From<DailyRow> for RowTuple {
    fn from(row: DailyRow) -> Self {
        (row.day, row.month, row.year, row.doy, row.max_temp, row.min_temp, row.precip)
    }
}

/// Tabular response: a fixed header plus one row per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub header: Vec<String>,
    pub value: Vec<DailyRow>,
}

impl WeatherResponse {
    pub fn new(value: Vec<DailyRow>) -> Self {
        Self {
            header: HEADER.iter().map(|h| h.to_string()).collect(),
            value,
        }
    }
}

/// JSON body of every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
