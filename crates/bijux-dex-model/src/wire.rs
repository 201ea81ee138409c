// SPDX-License-Identifier: Apache-2.0

//! Upstream JSON shapes. Only the fields the projections read are declared;
//! everything else in the upstream payload is ignored.

use crate::record::NamedResource;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RecordWire {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlotWire>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlotWire>,
    #[serde(default)]
    pub stats: Vec<StatWire>,
    #[serde(default)]
    pub moves: Vec<MoveSlotWire>,
    #[serde(default)]
    pub sprites: Option<SpritesWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlotWire {
    #[serde(rename = "type")]
    pub kind: NameWire,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlotWire {
    pub ability: NameWire,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatWire {
    pub base_stat: u32,
    pub stat: NameWire,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoveSlotWire {
    #[serde(rename = "move")]
    pub entry: NameWire,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameWire {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpritesWire {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSpritesWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OtherSpritesWire {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtworkWire {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeWire {
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMemberWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeMemberWire {
    pub pokemon: NamedResource,
}
