use thiserror::Error;

use crate::model::WeatherRequest;

/// Earliest year the archive is queried for.
pub const MIN_YEAR: i32 = 1950;

/// Year-range policy violations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YearRangeError {
    #[error("Start year must be greater than or equal to 1950.")]
    StartBeforeMinimum,

    #[error("End year must be greater than or equal to 1950.")]
    EndBeforeMinimum,

    #[error("End year must be greater than or equal to start year.")]
    EndBeforeStart,

    #[error("End year cannot be greater than the current year ({current_year}).")]
    EndInFuture { current_year: i32 },

    #[error("Start year cannot be greater than the current year ({current_year}).")]
    StartInFuture { current_year: i32 },
}

impl WeatherRequest {
    /// Check the year range against `current_year`.
    ///
    /// Only the first failing check is reported.
    pub fn validate(&self, current_year: i32) -> Result<(), YearRangeError> {
        if self.start_year < MIN_YEAR {
            return Err(YearRangeError::StartBeforeMinimum);
        }
        if self.end_year < MIN_YEAR {
            return Err(YearRangeError::EndBeforeMinimum);
        }
        if self.end_year < self.start_year {
            return Err(YearRangeError::EndBeforeStart);
        }
        if self.end_year > current_year {
            return Err(YearRangeError::EndInFuture { current_year });
        }
        if self.start_year > current_year {
            return Err(YearRangeError::StartInFuture { current_year });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_year: i32, end_year: i32) -> WeatherRequest {
        WeatherRequest { lon: 105.85, lat: 21.02, start_year, end_year }
    }

    #[test]
    fn accepts_range_within_bounds() {
        assert_eq!(request(2020, 2023).validate(2026), Ok(()));
        assert_eq!(request(1950, 1950).validate(2026), Ok(()));
        assert_eq!(request(2026, 2026).validate(2026), Ok(()));
    }

    #[test]
    fn rejects_start_before_1950() {
        let err = request(1949, 2000).validate(2026).unwrap_err();
        assert_eq!(err, YearRangeError::StartBeforeMinimum);
        assert_eq!(err.to_string(), "Start year must be greater than or equal to 1950.");
    }

    #[test]
    fn rejects_end_before_1950() {
        let err = request(1950, 1949).validate(2026).unwrap_err();
        assert_eq!(err, YearRangeError::EndBeforeMinimum);
    }

    #[test]
    fn rejects_end_before_start() {
        let err = request(2024, 2023).validate(2026).unwrap_err();
        assert_eq!(err.to_string(), "End year must be greater than or equal to start year.");
    }

    #[test]
    fn rejects_end_after_current_year() {
        let err = request(2020, 3000).validate(2026).unwrap_err();
        assert_eq!(
            err.to_string(),
            "End year cannot be greater than the current year (2026)."
        );
    }

    #[test]
    fn start_after_current_year_reports_end_first() {
        // end >= start > current, so the end-year bound trips before the start-year one.
        let err = request(2050, 2050).validate(2026).unwrap_err();
        assert_eq!(err, YearRangeError::EndInFuture { current_year: 2026 });
    }

    #[test]
    fn end_before_start_wins_over_future_years() {
        let err = request(3001, 3000).validate(2026).unwrap_err();
        assert_eq!(err, YearRangeError::EndBeforeStart);
    }

    #[test]
    fn start_in_future_message_names_current_year() {
        let err = YearRangeError::StartInFuture { current_year: 2026 };
        assert_eq!(
            err.to_string(),
            "Start year cannot be greater than the current year (2026)."
        );
    }
}
