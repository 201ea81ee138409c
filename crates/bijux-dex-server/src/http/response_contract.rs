// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_dex_api::{ApiError, ApiErrorCode, FailureShape};

pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::InvalidQueryParameter => StatusCode::BAD_REQUEST,
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    (api_error_status(err.code), Json(err.body())).into_response()
}

/// Error a route reports for any upstream failure.
pub(crate) fn failure_error(shape: FailureShape) -> ApiError {
    match shape.code() {
        Some(ApiErrorCode::NotFound) => ApiError::not_found(),
        _ => ApiError::fetch_failed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_stable() {
        assert_eq!(
            api_error_status(ApiErrorCode::InvalidQueryParameter),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(api_error_status(ApiErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            api_error_status(ApiErrorCode::UpstreamUnavailable),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn keyed_failures_never_map_to_server_errors() {
        let err = failure_error(FailureShape::NotFound);
        assert_eq!(api_error_status(err.code), StatusCode::NOT_FOUND);
        let err = failure_error(FailureShape::FetchFailed);
        assert_eq!(err.code, ApiErrorCode::UpstreamUnavailable);
    }
}
