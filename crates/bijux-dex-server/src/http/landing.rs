// SPDX-License-Identifier: Apache-2.0

use axum::response::Html;
use bijux_dex_api::{routes, ENDPOINTS};

pub(crate) async fn landing_handler() -> Html<String> {
    Html(landing_page())
}

pub(crate) fn landing_page() -> String {
    let rows: String = ENDPOINTS
        .iter()
        .map(|ep| {
            let query = if ep.query.is_empty() {
                String::new()
            } else {
                format!(" <small>?{}</small>", ep.query.join("&amp;"))
            };
            format!(
                "<li><code>{} {}</code>{query} - {}</li>",
                ep.method, ep.path, ep.summary
            )
        })
        .collect();
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Bijux Dex</title></head><body>\
<h1>Bijux Dex Gateway</h1>\
<p>Version: <code>{}</code></p>\
<h2>Endpoints</h2><ul>{rows}</ul>\
<h2>Example Queries</h2>\
<ul>\
<li><a href=\"{records}?limit=20&amp;offset=0\">{records}?limit=20&amp;offset=0</a></li>\
<li><a href=\"{pikachu}\">{pikachu}</a></li>\
<li><a href=\"{types}\">{types}</a></li>\
</ul>\
</body></html>",
        env!("CARGO_PKG_VERSION"),
        records = routes::RECORDS,
        pikachu = routes::with_param(routes::RECORD_SEARCH, "pikachu"),
        types = routes::TYPES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_lists_every_endpoint() {
        let html = landing_page();
        for ep in ENDPOINTS {
            assert!(html.contains(ep.path), "missing {}", ep.path);
        }
        assert!(html.contains("/api/pokemon-search/pikachu"));
    }
}
