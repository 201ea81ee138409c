// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

pub const NOT_FOUND: &str = "not found";
pub const FETCH_FAILED: &str = "fetch failed";
pub const INVALID_QUERY_PARAMETER: &str = "invalid query parameter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    NotFound,
    UpstreamUnavailable,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidQueryParameter => "invalid_query_parameter",
            Self::NotFound => "not_found",
            Self::UpstreamUnavailable => "upstream_unavailable",
        }
    }

    /// Stable message sent to callers; upstream error text never leaks into it.
    #[must_use]
    pub const fn public_message(self) -> &'static str {
        match self {
            Self::InvalidQueryParameter => INVALID_QUERY_PARAMETER,
            Self::NotFound => NOT_FOUND,
            Self::UpstreamUnavailable => FETCH_FAILED,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gateway-side error. `details` feeds logs only; the wire body is [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, details: Value) -> Self {
        Self { code, details }
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            json!({"parameter": name, "value": value}),
        )
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ApiErrorCode::NotFound, json!({}))
    }

    #[must_use]
    pub fn fetch_failed() -> Self {
        Self::new(ApiErrorCode::UpstreamUnavailable, json!({}))
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code.public_message().to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.details)
    }
}

impl std::error::Error for ApiError {}

/// The only error shape the gateway emits: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape_is_stable() {
        let body = serde_json::to_value(ApiError::not_found().body()).expect("json");
        assert_eq!(body, json!({"error": "not found"}));
        let body = serde_json::to_value(ApiError::fetch_failed().body()).expect("json");
        assert_eq!(body, json!({"error": "fetch failed"}));
    }

    #[test]
    fn invalid_param_keeps_details_out_of_body() {
        let err = ApiError::invalid_param("limit", "-1");
        assert_eq!(err.details["parameter"], "limit");
        assert_eq!(err.body().error, INVALID_QUERY_PARAMETER);
    }
}
