#![forbid(unsafe_code)]

mod endpoints;
mod errors;
pub mod params;

pub use endpoints::{Endpoint, FailureShape, ENDPOINTS};
pub use errors::{ApiError, ApiErrorCode, ErrorBody, FETCH_FAILED, INVALID_QUERY_PARAMETER, NOT_FOUND};
pub use params::{parse_list_params, ListParams, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};

pub const CRATE_NAME: &str = "bijux-dex-api";

pub mod routes {
    pub const RECORDS: &str = "/api/pokemon";
    pub const RECORD: &str = "/api/pokemon/:id";
    pub const RECORD_SEARCH: &str = "/api/pokemon-search/:name";
    pub const TYPES: &str = "/api/types";
    pub const TYPE: &str = "/api/type/:typeName";
    pub const ABILITIES: &str = "/api/abilities";
    pub const LANDING: &str = "/";
    pub const HEALTHZ: &str = "/healthz";

    /// Concrete path for a route template with one `:param` segment.
    #[must_use]
    pub fn with_param(template: &str, value: &str) -> String {
        match template.rfind('/') {
            Some(idx) if template[idx + 1..].starts_with(':') => {
                format!("{}/{}", &template[..idx], value)
            }
            _ => template.to_string(),
        }
    }
}
