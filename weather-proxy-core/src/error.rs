//! Failures surfaced by the proxy, each carrying its response status.

use thiserror::Error;

use crate::validate::YearRangeError;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Malformed request body or a year-range policy violation.
    #[error("{0}")]
    Validation(String),

    /// The archive answered with a non-2xx status.
    #[error("Error from upstream weather API: {detail}")]
    Upstream { status: u16, detail: String },

    /// Anything else: transport failure, unexpected payload shape, bad dates.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }

    /// HTTP status the failure is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => 500,
        }
    }

    /// Text of the `detail` field in the error body.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl From<YearRangeError> for ProxyError {
    fn from(err: YearRangeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::internal(err)
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422_with_bare_message() {
        let err = ProxyError::from(YearRangeError::EndBeforeStart);

        assert_eq!(err.status_code(), 422);
        assert_eq!(err.detail(), "End year must be greater than or equal to start year.");
    }

    #[test]
    fn upstream_keeps_upstream_status() {
        let err = ProxyError::Upstream {
            status: 400,
            detail: "400 Bad Request: Parameter 'start_date' is out of range".into(),
        };

        assert_eq!(err.status_code(), 400);
        assert!(err.detail().starts_with("Error from upstream weather API: "));
    }

    #[test]
    fn json_failures_collapse_to_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ProxyError::from(json_err);

        assert_eq!(err.status_code(), 500);
        assert!(err.detail().starts_with("Internal server error: "));
    }
}
