// SPDX-License-Identifier: Apache-2.0

use bijux_dex_api::{parse_list_params, ApiErrorCode, ListParams, DEFAULT_LIST_LIMIT};
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn list_params_default_to_first_page_of_twenty() {
    let parsed = parse_list_params(&BTreeMap::new()).expect("defaults");
    assert_eq!(parsed, ListParams::default());
    assert_eq!(parsed.limit, DEFAULT_LIST_LIMIT);
    assert_eq!(parsed.offset, 0);
}

#[test]
fn list_params_accept_zero_and_large_values() {
    let parsed = parse_list_params(&query(&[("limit", "0"), ("offset", "100000")])).expect("ok");
    assert_eq!(parsed.limit, 0);
    assert_eq!(parsed.offset, 100_000);
}

#[test]
fn list_params_reject_negative_or_non_numeric_values() {
    for (name, raw) in [("limit", "-1"), ("offset", "ten"), ("limit", "1.5"), ("offset", "")] {
        let err = parse_list_params(&query(&[(name, raw)])).expect_err("invalid");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
        assert_eq!(err.details["parameter"], name);
    }
}

#[test]
fn unknown_query_keys_are_ignored() {
    let parsed = parse_list_params(&query(&[("pretty", "1"), ("limit", "5")])).expect("ok");
    assert_eq!(parsed.limit, 5);
}
