// SPDX-License-Identifier: Apache-2.0

use crate::key::ValidationError;
use crate::wire::RecordWire;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{name, url}` reference as returned by every upstream list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(rename = "url", default)]
    pub resource_url: String,
}

impl NamedResource {
    #[must_use]
    pub fn new(name: impl Into<String>, resource_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_url: resource_url.into(),
        }
    }
}

pub type RecordSummary = NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub primary_image_url: Option<String>,
    pub fallback_image_url: Option<String>,
}

impl Artwork {
    /// Official artwork when present, otherwise the default sprite.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.primary_image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.fallback_image_url.as_deref().filter(|u| !u.is_empty()))
    }
}

/// Full record projection. `weight_hectograms` is the upstream `weight` field;
/// dividing it by ten yields kilograms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetail {
    pub id: u32,
    pub name: String,
    pub height_decimeters: u32,
    pub weight_hectograms: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
    pub moves: Vec<String>,
    pub artwork: Artwork,
}

impl RecordDetail {
    pub fn from_upstream(value: &Value) -> Result<Self, ValidationError> {
        let wire: RecordWire = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError(format!("record payload parse failed: {e}")))?;
        Ok(Self::from_wire(wire))
    }

    pub fn from_upstream_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let wire: RecordWire = serde_json::from_slice(bytes)
            .map_err(|e| ValidationError(format!("record payload parse failed: {e}")))?;
        Ok(Self::from_wire(wire))
    }

    fn from_wire(wire: RecordWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            height_decimeters: wire.height,
            weight_hectograms: wire.weight,
            types: wire.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: wire.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            moves: wire.moves.into_iter().map(|m| m.entry.name).collect(),
            artwork: wire.sprites.map_or_else(Artwork::default, |sprites| Artwork {
                primary_image_url: sprites
                    .other
                    .and_then(|o| o.official_artwork)
                    .and_then(|a| a.front_default),
                fallback_image_url: sprites.front_default,
            }),
        }
    }
}
