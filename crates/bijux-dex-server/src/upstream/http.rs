// SPDX-License-Identifier: Apache-2.0

use super::{CatalogUpstream, UpstreamError, UpstreamResource};
use crate::config::UpstreamConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::instrument;

/// Upstream backend speaking plain HTTP to the public catalog API.
pub struct HttpUpstream {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(cfg.base_url.trim_end_matches('/'))
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", cfg.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(format!(
                "{} cannot carry path segments",
                cfg.base_url
            )));
        }
        let mut builder = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(cfg.max_redirects));
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Transport(format!("client build failed: {e}")))?;
        Ok(Self { base_url, client })
    }

    /// Path segments are percent-encoded individually, so a key can never
    /// address a different upstream path.
    pub fn resource_url(&self, resource: &UpstreamResource) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl("base url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(resource.path_segments());
        if let Some((limit, offset)) = resource.window() {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string())
                .append_pair("offset", &offset.to_string());
        }
        Ok(url)
    }
}

#[async_trait]
impl CatalogUpstream for HttpUpstream {
    fn backend_tag(&self) -> &'static str {
        "http"
    }

    #[instrument(name = "upstream_http_fetch", skip(self, resource), fields(resource = %resource))]
    async fn fetch(&self, resource: &UpstreamResource) -> Result<Value, UpstreamError> {
        let url = self.resource_url(resource)?;
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
