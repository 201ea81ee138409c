// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{api_error_response, failure_error};
use crate::upstream::UpstreamResource;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_dex_api::{parse_list_params, routes, FailureShape, ListParams};
use bijux_dex_model::{RecordKey, TypeName};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// One upstream call; the body is relayed untouched on success.
async fn relay(
    state: &AppState,
    route: &'static str,
    shape: FailureShape,
    resource: UpstreamResource,
) -> Response {
    info!(route, resource = %resource, "request start");
    match state.upstream.fetch(&resource).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(
                route,
                resource = %resource,
                upstream = state.upstream.backend_tag(),
                error = %err,
                "upstream fetch failed"
            );
            api_error_response(&failure_error(shape))
        }
    }
}

fn list_params(route: &'static str, query: &BTreeMap<String, String>) -> Result<ListParams, Response> {
    parse_list_params(query).map_err(|err| {
        info!(route, details = %err.details, "rejected list parameters");
        api_error_response(&err)
    })
}

pub(crate) async fn list_records_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let ListParams { limit, offset } = match list_params(routes::RECORDS, &query) {
        Ok(params) => params,
        Err(resp) => return resp,
    };
    relay(
        &state,
        routes::RECORDS,
        FailureShape::FetchFailed,
        UpstreamResource::RecordList { limit, offset },
    )
    .await
}

async fn record_by_key(state: &AppState, route: &'static str, raw: &str) -> Response {
    match RecordKey::parse(raw) {
        Ok(key) => {
            relay(
                state,
                route,
                FailureShape::NotFound,
                UpstreamResource::Record(key),
            )
            .await
        }
        Err(err) => {
            info!(route, error = %err, "rejected record identifier");
            api_error_response(&failure_error(FailureShape::NotFound))
        }
    }
}

pub(crate) async fn record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    record_by_key(&state, routes::RECORD, &id).await
}

/// Same upstream resource as [`record_handler`]; kept as its own route.
pub(crate) async fn record_search_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    record_by_key(&state, routes::RECORD_SEARCH, &name).await
}

pub(crate) async fn types_handler(State(state): State<AppState>) -> Response {
    relay(
        &state,
        routes::TYPES,
        FailureShape::FetchFailed,
        UpstreamResource::TypeList,
    )
    .await
}

pub(crate) async fn type_handler(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Response {
    match TypeName::parse(&type_name) {
        Ok(name) => {
            relay(
                &state,
                routes::TYPE,
                FailureShape::NotFound,
                UpstreamResource::Type(name),
            )
            .await
        }
        Err(err) => {
            info!(route = routes::TYPE, error = %err, "rejected type name");
            api_error_response(&failure_error(FailureShape::NotFound))
        }
    }
}

pub(crate) async fn abilities_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let ListParams { limit, offset } = match list_params(routes::ABILITIES, &query) {
        Ok(params) => params,
        Err(resp) => return resp,
    };
    relay(
        &state,
        routes::ABILITIES,
        FailureShape::FetchFailed,
        UpstreamResource::AbilityList { limit, offset },
    )
    .await
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
