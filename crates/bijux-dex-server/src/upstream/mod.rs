// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use bijux_dex_model::{RecordKey, TypeName};
use serde_json::Value;
use std::fmt;

pub mod fake;
pub mod http;

/// One upstream resource; each inbound request maps to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpstreamResource {
    RecordList { limit: u32, offset: u32 },
    Record(RecordKey),
    TypeList,
    Type(TypeName),
    AbilityList { limit: u32, offset: u32 },
}

impl UpstreamResource {
    #[must_use]
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Self::RecordList { .. } => vec!["pokemon"],
            Self::Record(key) => vec!["pokemon", key.as_str()],
            Self::TypeList => vec!["type"],
            Self::Type(name) => vec!["type", name.as_str()],
            Self::AbilityList { .. } => vec!["ability"],
        }
    }

    /// `(limit, offset)` forwarded as query parameters, for list resources.
    #[must_use]
    pub fn window(&self) -> Option<(u32, u32)> {
        match self {
            Self::RecordList { limit, offset } | Self::AbilityList { limit, offset } => {
                Some((*limit, *offset))
            }
            _ => None,
        }
    }
}

impl fmt::Display for UpstreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segments().join("/"))?;
        if let Some((limit, offset)) = self.window() {
            write!(f, "?limit={limit}&offset={offset}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    NotFound,
    Status(u16),
    Transport(String),
    Decode(String),
    InvalidUrl(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "upstream resource not found"),
            Self::Status(code) => write!(f, "upstream returned status {code}"),
            Self::Transport(msg) => write!(f, "upstream request failed: {msg}"),
            Self::Decode(msg) => write!(f, "upstream body decode failed: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "invalid upstream url: {msg}"),
        }
    }
}

impl std::error::Error for UpstreamError {}

#[async_trait]
pub trait CatalogUpstream: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    async fn fetch(&self, resource: &UpstreamResource) -> Result<Value, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_display_mirrors_upstream_path() {
        let list = UpstreamResource::RecordList {
            limit: 20,
            offset: 40,
        };
        assert_eq!(list.to_string(), "pokemon?limit=20&offset=40");
        let record = UpstreamResource::Record(RecordKey::parse("Pikachu").expect("key"));
        assert_eq!(record.to_string(), "pokemon/pikachu");
        assert_eq!(UpstreamResource::TypeList.to_string(), "type");
        assert!(UpstreamResource::TypeList.window().is_none());
    }
}
