// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use std::sync::atomic::Ordering;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_ID_MAX_LEN: usize = 128;

/// Caller-supplied `x-request-id` when usable, otherwise a generated one.
#[must_use]
pub(crate) fn extract_request_id(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= REQUEST_ID_MAX_LEN)
        .map(ToString::to_string)
        .unwrap_or_else(|| {
            let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
            format!("req-{id:016x}")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeUpstream;
    use axum::http::HeaderValue;
    use std::sync::Arc;

    #[test]
    fn keeps_caller_request_id_and_generates_otherwise() {
        let state = AppState::new(Arc::new(FakeUpstream::new()));
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-abc"));
        assert_eq!(extract_request_id(&headers, &state), "req-abc");

        let first = extract_request_id(&HeaderMap::new(), &state);
        let second = extract_request_id(&HeaderMap::new(), &state);
        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }
}
