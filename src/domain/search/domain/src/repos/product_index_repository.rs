// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The full-text engine surface the core consumes. One implementation per
/// engine; everything above this trait is engine-agnostic.
#[async_trait::async_trait]
pub trait ProductIndexRepository: Send + Sync {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError>;

    /// Raw mappings of the index (`{"properties": {...}}`)
    async fn get_mappings(&self, index: &str) -> Result<serde_json::Value, SearchEngineError>;

    /// Creates an index, optionally with an explicit mapping body
    async fn create_index(
        &self,
        index: &str,
        mappings: Option<&serde_json::Value>,
    ) -> Result<(), SearchEngineError>;

    async fn delete_index(&self, index: &str) -> Result<(), SearchEngineError>;

    /// Makes recently indexed documents visible to subsequent searches
    async fn refresh_index(&self, index: &str) -> Result<(), SearchEngineError>;

    /// Indexes a single document and returns the engine-assigned id
    async fn index_document(
        &self,
        index: &str,
        document: &serde_json::Value,
    ) -> Result<String, SearchEngineError>;

    async fn bulk_index(
        &self,
        index: &str,
        documents: &[serde_json::Value],
    ) -> Result<(), SearchEngineError>;

    /// Samples up to `size` distinct values of an exact-token field
    async fn sample_field_values(
        &self,
        index: &str,
        field: &str,
        size: usize,
    ) -> Result<Vec<String>, SearchEngineError>;

    /// Executes the plan-compiled free-text search
    async fn search_planned(
        &self,
        index: &str,
        query_text: &str,
        plan: &QueryPlan,
    ) -> Result<Vec<ProductHit>, SearchEngineError>;

    /// Category search: exact category match, price/rating ranges, optional
    /// stock requirement, sorted rating desc then price asc
    async fn search_by_category(
        &self,
        index: &str,
        params: &CategorySearchParams,
    ) -> Result<Vec<ProductHit>, SearchEngineError>;

    /// Brand search: exact brand match sorted rating desc
    async fn search_by_brand(
        &self,
        index: &str,
        brand: &str,
    ) -> Result<Vec<ProductHit>, SearchEngineError>;
}
