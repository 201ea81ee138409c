// SPDX-License-Identifier: Apache-2.0

use crate::errors::GatewayError;
use crate::gateway::Gateway;
use async_trait::async_trait;
use bijux_dex_model::{
    AbilitySummary, Artwork, NamedResource, Page, RecordDetail, RecordKey, RecordSummary, Stat,
    TypeCategory, TypeMembership, TypeName,
};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory gateway.
///
/// Every call is recorded as a label (`list 20 0`, `record pikachu`,
/// `search pikachu`, `types`, `type fire`, `abilities 20 0`); a failure
/// registered under the same label is returned instead of data. Unknown
/// records and types answer [`GatewayError::NotFound`]; unknown list windows
/// answer an empty page.
#[derive(Default)]
pub struct FakeGateway {
    pub pages: Mutex<HashMap<(u32, u32), Vec<RecordSummary>>>,
    pub records: Mutex<HashMap<String, RecordDetail>>,
    pub memberships: Mutex<HashMap<String, Vec<RecordSummary>>>,
    pub type_names: Mutex<Vec<String>>,
    pub failures: Mutex<HashMap<String, GatewayError>>,
    pub calls: Mutex<Vec<String>>,
}

/// Small but complete record, addressable by `name`.
#[must_use]
pub fn stub_record(id: u32, name: &str) -> RecordDetail {
    RecordDetail {
        id,
        name: name.to_string(),
        height_decimeters: 10 + id % 10,
        weight_hectograms: 100 + id,
        types: vec!["normal".to_string()],
        abilities: vec!["run-away".to_string()],
        stats: vec![Stat {
            name: "hp".to_string(),
            base_value: 50,
        }],
        moves: vec!["tackle".to_string()],
        artwork: Artwork::default(),
    }
}

#[must_use]
pub fn summary(name: &str) -> RecordSummary {
    NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon/{name}/"))
}

impl FakeGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(mut self, record: RecordDetail) -> Self {
        self.records.get_mut().insert(record.name.clone(), record);
        self
    }

    /// Registers the page and a stub record for every name on it.
    #[must_use]
    pub fn with_page(mut self, limit: u32, offset: u32, names: &[&str]) -> Self {
        let summaries = names.iter().map(|n| summary(n)).collect();
        self.pages.get_mut().insert((limit, offset), summaries);
        for (i, name) in names.iter().enumerate() {
            let id = offset + u32::try_from(i).unwrap_or(u32::MAX) + 1;
            self.records
                .get_mut()
                .entry((*name).to_string())
                .or_insert_with(|| stub_record(id, name));
        }
        self
    }

    #[must_use]
    pub fn with_membership(mut self, type_name: &str, names: &[String]) -> Self {
        let summaries = names.iter().map(|n| summary(n)).collect();
        self.memberships
            .get_mut()
            .insert(type_name.to_string(), summaries);
        for (i, name) in names.iter().enumerate() {
            let id = 1000 + u32::try_from(i).unwrap_or(u32::MAX);
            self.records
                .get_mut()
                .entry(name.clone())
                .or_insert_with(|| stub_record(id, name));
        }
        self
    }

    #[must_use]
    pub fn with_types(mut self, names: &[&str]) -> Self {
        *self.type_names.get_mut() = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_failure(mut self, label: &str, err: GatewayError) -> Self {
        self.failures.get_mut().insert(label.to_string(), err);
        self
    }

    pub async fn clear_failure(&self, label: &str) {
        self.failures.lock().await.remove(label);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn enter(&self, label: String) -> Result<(), GatewayError> {
        self.calls.lock().await.push(label.clone());
        match self.failures.lock().await.get(&label) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn lookup(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        self.records
            .lock()
            .await
            .get(key.as_str())
            .cloned()
            .ok_or(GatewayError::NotFound)
    }
}

fn page_of<T>(results: Vec<T>) -> Page<T> {
    Page::new(results.len() as u64, results)
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_records(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<RecordSummary>, GatewayError> {
        self.enter(format!("list {limit} {offset}")).await?;
        let results = self
            .pages
            .lock()
            .await
            .get(&(limit, offset))
            .cloned()
            .unwrap_or_default();
        Ok(page_of(results))
    }

    async fn record(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        self.enter(format!("record {key}")).await?;
        self.lookup(key).await
    }

    async fn search(&self, key: &RecordKey) -> Result<RecordDetail, GatewayError> {
        self.enter(format!("search {key}")).await?;
        self.lookup(key).await
    }

    async fn types(&self) -> Result<Page<TypeCategory>, GatewayError> {
        self.enter("types".to_string()).await?;
        let names = self.type_names.lock().await.clone();
        Ok(page_of(
            names
                .iter()
                .map(|n| NamedResource::new(n.as_str(), format!("https://pokeapi.co/api/v2/type/{n}/")))
                .collect(),
        ))
    }

    async fn type_members(&self, name: &TypeName) -> Result<TypeMembership, GatewayError> {
        self.enter(format!("type {name}")).await?;
        let members = self
            .memberships
            .lock()
            .await
            .get(name.as_str())
            .cloned()
            .ok_or(GatewayError::NotFound)?;
        Ok(TypeMembership {
            type_name: name.to_string(),
            members,
        })
    }

    async fn abilities(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AbilitySummary>, GatewayError> {
        self.enter(format!("abilities {limit} {offset}")).await?;
        Ok(page_of(Vec::new()))
    }
}
