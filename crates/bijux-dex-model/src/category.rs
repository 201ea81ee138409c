// SPDX-License-Identifier: Apache-2.0

use crate::key::ValidationError;
use crate::record::{NamedResource, RecordSummary};
use crate::wire::TypeWire;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type TypeCategory = NamedResource;
pub type AbilitySummary = NamedResource;

/// Records tagged with one type, in upstream slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMembership {
    pub type_name: String,
    pub members: Vec<RecordSummary>,
}

impl TypeMembership {
    pub fn from_upstream(value: &Value) -> Result<Self, ValidationError> {
        let wire: TypeWire = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError(format!("type payload parse failed: {e}")))?;
        Ok(Self {
            type_name: wire.name,
            members: wire.pokemon.into_iter().map(|m| m.pokemon).collect(),
        })
    }

    /// First `cap` members; the membership endpoint is not paginated upstream.
    #[must_use]
    pub fn truncated(mut self, cap: usize) -> Self {
        self.members.truncate(cap);
        self
    }
}
