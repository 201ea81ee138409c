// SPDX-License-Identifier: Apache-2.0

use bijux_dex_api::{routes, ApiErrorCode, FailureShape, ENDPOINTS};
use std::collections::BTreeSet;

#[test]
fn endpoint_paths_are_unique_and_get_only() {
    let mut seen = BTreeSet::new();
    for ep in ENDPOINTS {
        assert_eq!(ep.method, "GET", "read-only surface: {}", ep.path);
        assert!(seen.insert(ep.path), "duplicate endpoint {}", ep.path);
        assert!(!ep.summary.trim().is_empty());
    }
}

#[test]
fn keyed_routes_fail_as_not_found_and_collections_as_fetch_failed() {
    for ep in ENDPOINTS {
        let keyed = ep.path.contains("/:");
        match ep.failure {
            FailureShape::NotFound => assert!(keyed, "{} should be keyed", ep.path),
            FailureShape::FetchFailed => assert!(!keyed, "{} should be a collection", ep.path),
            FailureShape::Never => {}
        }
    }
    assert_eq!(
        FailureShape::NotFound.code(),
        Some(ApiErrorCode::NotFound)
    );
    assert_eq!(
        FailureShape::FetchFailed.code(),
        Some(ApiErrorCode::UpstreamUnavailable)
    );
}

#[test]
fn paginated_routes_declare_limit_and_offset() {
    for path in [routes::RECORDS, routes::ABILITIES] {
        let ep = ENDPOINTS
            .iter()
            .find(|e| e.path == path)
            .expect("endpoint present");
        assert_eq!(ep.query, &["limit", "offset"]);
    }
}
