// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// `*` admits every origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("bijux-dex-server/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 5,
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig, upstream: &UpstreamConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("api size limits must be > 0".to_string());
    }
    if api
        .cors_allowed_origins
        .iter()
        .any(|origin| origin.trim().is_empty())
    {
        return Err("cors allowed origins must not contain empty entries".to_string());
    }
    let parsed = reqwest::Url::parse(&upstream.base_url)
        .map_err(|e| format!("invalid upstream base url {}: {e}", upstream.base_url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "upstream base url must use http or https, got {}",
            parsed.scheme()
        ));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err("upstream base url must have a host".to_string());
    }
    if upstream.timeout.is_some_and(|t| t.is_zero()) {
        return Err("upstream timeout must be > 0 when set".to_string());
    }
    if upstream.user_agent.trim().is_empty() {
        return Err("upstream user agent must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_startup_validation() {
        validate_startup_config(&ApiConfig::default(), &UpstreamConfig::default())
            .expect("defaults are valid");
    }

    #[test]
    fn startup_validation_rejects_bad_upstream() {
        let api = ApiConfig::default();
        let upstream = UpstreamConfig {
            base_url: "ftp://catalog.example".to_string(),
            ..UpstreamConfig::default()
        };
        let err = validate_startup_config(&api, &upstream).expect_err("scheme");
        assert!(err.contains("http or https"));

        let upstream = UpstreamConfig {
            timeout: Some(Duration::ZERO),
            ..UpstreamConfig::default()
        };
        let err = validate_startup_config(&api, &upstream).expect_err("timeout");
        assert!(err.contains("timeout"));
    }

    #[test]
    fn wildcard_origin_admits_everything() {
        let api = ApiConfig::default();
        assert!(api.allows_origin("http://localhost:5173"));
        let api = ApiConfig {
            cors_allowed_origins: vec!["https://dex.example".to_string()],
            ..ApiConfig::default()
        };
        assert!(api.allows_origin("https://dex.example"));
        assert!(!api.allows_origin("https://evil.example"));
    }
}
