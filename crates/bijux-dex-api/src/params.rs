// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use std::collections::BTreeMap;

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const DEFAULT_LIST_OFFSET: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: DEFAULT_LIST_OFFSET,
        }
    }
}

fn parse_non_negative(
    query: &BTreeMap<String, String>,
    name: &str,
    default: u32,
) -> Result<u32, ApiError> {
    match query.get(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ApiError::invalid_param(name, raw)),
    }
}

/// `limit` and `offset` for the paginated list routes. Absent values take the
/// defaults; anything that is not a non-negative integer is rejected.
pub fn parse_list_params(query: &BTreeMap<String, String>) -> Result<ListParams, ApiError> {
    Ok(ListParams {
        limit: parse_non_negative(query, "limit", DEFAULT_LIST_LIMIT)?,
        offset: parse_non_negative(query, "offset", DEFAULT_LIST_OFFSET)?,
    })
}
