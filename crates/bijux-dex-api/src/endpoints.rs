// SPDX-License-Identifier: Apache-2.0

use crate::routes;
use crate::ApiErrorCode;

/// How a route reports an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureShape {
    /// Collection routes: any failure is `500 fetch failed`.
    FetchFailed,
    /// Keyed routes: any failure, including upstream 5xx, is `404 not found`.
    NotFound,
    Never,
}

impl FailureShape {
    #[must_use]
    pub const fn code(self) -> Option<ApiErrorCode> {
        match self {
            Self::FetchFailed => Some(ApiErrorCode::UpstreamUnavailable),
            Self::NotFound => Some(ApiErrorCode::NotFound),
            Self::Never => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub query: &'static [&'static str],
    pub failure: FailureShape,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: routes::RECORDS,
        summary: "paginated record list",
        query: &["limit", "offset"],
        failure: FailureShape::FetchFailed,
    },
    Endpoint {
        method: "GET",
        path: routes::RECORD,
        summary: "record detail by id or name",
        query: &[],
        failure: FailureShape::NotFound,
    },
    Endpoint {
        method: "GET",
        path: routes::RECORD_SEARCH,
        summary: "record detail by name",
        query: &[],
        failure: FailureShape::NotFound,
    },
    Endpoint {
        method: "GET",
        path: routes::TYPES,
        summary: "type list",
        query: &[],
        failure: FailureShape::FetchFailed,
    },
    Endpoint {
        method: "GET",
        path: routes::TYPE,
        summary: "records of one type",
        query: &[],
        failure: FailureShape::NotFound,
    },
    Endpoint {
        method: "GET",
        path: routes::ABILITIES,
        summary: "paginated ability list",
        query: &["limit", "offset"],
        failure: FailureShape::FetchFailed,
    },
    Endpoint {
        method: "GET",
        path: routes::LANDING,
        summary: "landing page",
        query: &[],
        failure: FailureShape::Never,
    },
    Endpoint {
        method: "GET",
        path: routes::HEALTHZ,
        summary: "liveness probe",
        query: &[],
        failure: FailureShape::Never,
    },
];
