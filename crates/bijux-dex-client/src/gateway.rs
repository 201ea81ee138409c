// SPDX-License-Identifier: Apache-2.0

use crate::errors::GatewayError;
use async_trait::async_trait;
use bijux_dex_api::routes;
use bijux_dex_model::{
    AbilitySummary, Page, RecordDetail, RecordKey, RecordSummary, TypeCategory, TypeMembership,
    TypeName,
};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3000";

/// Read surface of the dex gateway as seen by the browse client.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    async fn list_records(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<RecordSummary>, GatewayError>;

    async fn record(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError>;

    async fn search(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError>;

    async fn types(&self) -> Result<Page<TypeCategory>, GatewayError>;

    async fn type_members(&self, name: &TypeName) -> Result<TypeMembership, GatewayError>;

    async fn abilities(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AbilitySummary>, GatewayError>;
}

pub struct HttpGateway {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| GatewayError::Unavailable(format!("invalid gateway url {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::Unavailable(format!(
                "gateway url {base_url} cannot carry a path"
            )));
        }
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("bijux-dex/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Unavailable(format!("client build failed: {e}")))?;
        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    /// Expands a route template; the `:param` segment is percent-encoded.
    pub fn route_url(
        &self,
        template: &str,
        param: Option<&str>,
        window: Option<(u32, u32)>,
    ) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GatewayError::Unavailable("gateway url cannot be a base".to_string())
            })?;
            segments.pop_if_empty();
            for segment in template.split('/').filter(|s| !s.is_empty()) {
                if segment.starts_with(':') {
                    if let Some(value) = param {
                        segments.push(value);
                    }
                } else {
                    segments.push(segment);
                }
            }
        }
        if let Some((limit, offset)) = window {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string())
                .append_pair("offset", &offset.to_string());
        }
        Ok(url)
    }

    #[instrument(name = "gateway_get", skip(self))]
    async fn get_value(&self, url: Url) -> Result<Value, GatewayError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;
        let status = resp.status();
        debug!(status = status.as_u16(), "gateway response");
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_typed<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let value = self.get_value(url).await?;
        serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_record(&self, route: &str, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        let url = self.route_url(route, Some(key.as_str()), None)?;
        let value = self.get_value(url).await?;
        RecordDetail::from_upstream(&value).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_records(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<RecordSummary>, GatewayError> {
        let url = self.route_url(routes::RECORDS, None, Some((limit, offset)))?;
        self.get_typed(url).await
    }

    async fn record(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        self.get_record(routes::RECORD, key).await
    }

    async fn search(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        self.get_record(routes::RECORD_SEARCH, key).await
    }

    async fn types(&self) -> Result<Page<TypeCategory>, GatewayError> {
        let url = self.route_url(routes::TYPES, None, None)?;
        self.get_typed(url).await
    }

    async fn type_members(&self, name: &TypeName) -> Result<TypeMembership, GatewayError> {
        let url = self.route_url(routes::TYPE, Some(name.as_str()), None)?;
        let value = self.get_value(url).await?;
        TypeMembership::from_upstream(&value).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn abilities(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AbilitySummary>, GatewayError> {
        let url = self.route_url(routes::ABILITIES, None, Some((limit, offset)))?;
        self.get_typed(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_url_expands_templates() {
        let gw = HttpGateway::new("http://127.0.0.1:3000/", None).expect("gateway");
        let url = gw
            .route_url(routes::RECORDS, None, Some((20, 40)))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/api/pokemon?limit=20&offset=40"
        );
        let url = gw
            .route_url(routes::RECORD_SEARCH, Some("mr. mime"), None)
            .expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/pokemon-search/mr.%20mime");
        let url = gw.route_url(routes::TYPE, Some("fire"), None).expect("url");
        assert_eq!(url.path(), "/api/type/fire");
    }

    #[test]
    fn rejects_unusable_gateway_urls() {
        assert!(HttpGateway::new("not a url", None).is_err());
        assert!(HttpGateway::new("mailto:someone@example.com", None).is_err());
    }
}
