// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use shopsearch_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// In-memory engine fake. Records every repository call into a shared event
/// log and serves canned hits and field values.
pub struct FakeProductIndexRepo {
    events: Arc<Mutex<Vec<String>>>,
    existing_indices: Mutex<HashSet<String>>,
    hits: Mutex<Vec<ProductHit>>,
    field_values: Mutex<HashMap<String, Vec<String>>>,
    fail_searches: Mutex<bool>,
}

impl FakeProductIndexRepo {
    pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            events,
            existing_indices: Mutex::new(HashSet::new()),
            hits: Mutex::new(Vec::new()),
            field_values: Mutex::new(HashMap::new()),
            fail_searches: Mutex::new(false),
        }
    }

    pub fn with_index(self, index: &str) -> Self {
        self.existing_indices
            .lock()
            .unwrap()
            .insert(index.to_string());
        self
    }

    pub fn with_hits(self, hits: Vec<ProductHit>) -> Self {
        *self.hits.lock().unwrap() = hits;
        self
    }

    pub fn with_field_values(self, field: &str, values: &[&str]) -> Self {
        self.field_values.lock().unwrap().insert(
            field.to_string(),
            values.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn with_failing_searches(self) -> Self {
        *self.fail_searches.lock().unwrap() = true;
        self
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    fn canned_hits(&self) -> Result<Vec<ProductHit>, SearchEngineError> {
        if *self.fail_searches.lock().unwrap() {
            return Err(SearchEngineError::bail("engine unavailable"));
        }
        Ok(self.hits.lock().unwrap().clone())
    }
}

#[async_trait::async_trait]
impl ProductIndexRepository for FakeProductIndexRepo {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError> {
        self.record(format!("exists:{index}"));
        Ok(self.existing_indices.lock().unwrap().contains(index))
    }

    async fn get_mappings(&self, index: &str) -> Result<serde_json::Value, SearchEngineError> {
        self.record(format!("mappings:{index}"));
        Ok(ProductIndexMappings::ecommerce()["mappings"].clone())
    }

    async fn create_index(
        &self,
        index: &str,
        mappings: Option<&serde_json::Value>,
    ) -> Result<(), SearchEngineError> {
        let kind = if mappings.is_some() { "mapped" } else { "unmapped" };
        self.record(format!("create:{index}:{kind}"));
        self.existing_indices
            .lock()
            .unwrap()
            .insert(index.to_string());
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.record(format!("delete:{index}"));
        self.existing_indices.lock().unwrap().remove(index);
        Ok(())
    }

    async fn refresh_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.record(format!("refresh:{index}"));
        Ok(())
    }

    async fn index_document(
        &self,
        index: &str,
        document: &serde_json::Value,
    ) -> Result<String, SearchEngineError> {
        self.record(format!(
            "doc:{index}:{}",
            document["product_name"].as_str().unwrap_or("?")
        ));
        Ok("fake-id-1".to_string())
    }

    async fn bulk_index(
        &self,
        index: &str,
        documents: &[serde_json::Value],
    ) -> Result<(), SearchEngineError> {
        self.record(format!("bulk:{index}:{}", documents.len()));
        Ok(())
    }

    async fn sample_field_values(
        &self,
        index: &str,
        field: &str,
        _size: usize,
    ) -> Result<Vec<String>, SearchEngineError> {
        self.record(format!("sample:{index}:{field}"));
        Ok(self
            .field_values
            .lock()
            .unwrap()
            .get(field)
            .cloned()
            .unwrap_or_default())
    }

    async fn search_planned(
        &self,
        index: &str,
        query_text: &str,
        plan: &QueryPlan,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        self.record(format!(
            "search:{index}:{}",
            plan.effective_query_text(query_text)
        ));
        self.canned_hits()
    }

    async fn search_by_category(
        &self,
        index: &str,
        params: &CategorySearchParams,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        self.record(format!("search_category:{index}:{}", params.category));
        self.canned_hits()
    }

    async fn search_by_brand(
        &self,
        index: &str,
        brand: &str,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        self.record(format!("search_brand:{index}:{brand}"));
        self.canned_hits()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Scripted LLM fake: replays a canned reply and captures the prompt it was
/// given. `None` behaves like a missing API key.
pub struct FakeChatCompletionService {
    reply: Option<String>,
    pub last_prompt: Mutex<Option<String>>,
}

impl FakeChatCompletionService {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            reply: None,
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for FakeChatCompletionService {
    async fn complete(
        &self,
        prompt: &str,
        _temperature: f32,
    ) -> Result<String, ChatCompletionError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply
            .clone()
            .ok_or(ChatCompletionError::MissingApiKey)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn product_hit(name: &str, price: f64, rating: f64) -> ProductHit {
    ProductHit {
        source: serde_json::json!({
            "product_name": name,
            "description": format!("{name} description."),
            "price": price,
            "brand": "TestBrand",
            "category": "Electronics",
            "rating": rating,
            "in_stock": true,
        }),
        score: Some(1.0),
    }
}
