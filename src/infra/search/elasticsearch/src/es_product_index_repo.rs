// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use shopsearch_search::{
    CategorySearchParams,
    ProductHit,
    ProductIndexRepository,
    QueryPlan,
    SearchEngineError,
};

use crate::es_client::{EsClient, EsSearchResponse};
use crate::{EsProductQueryBuilder, EsSearchConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Elasticsearch-backed product index. The HTTP client is built lazily on first
/// use so that constructing the component never touches the network.
pub struct EsProductIndexRepo {
    config: Arc<EsSearchConfig>,
    client: tokio::sync::OnceCell<EsClient>,
}

#[dill::component(pub)]
#[dill::scope(dill::Singleton)]
#[dill::interface(dyn ProductIndexRepository)]
impl EsProductIndexRepo {
    pub fn new(config: Arc<EsSearchConfig>) -> Self {
        Self {
            config,
            client: tokio::sync::OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&EsClient, SearchEngineError> {
        self.client
            .get_or_try_init(|| async { EsClient::init(self.config.as_ref().clone()) })
            .await
    }

    fn hits(response: EsSearchResponse) -> Vec<ProductHit> {
        response
            .hits
            .hits
            .into_iter()
            .filter_map(|hit| {
                hit.source.map(|source| ProductHit {
                    source,
                    score: hit.score,
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ProductIndexRepository for EsProductIndexRepo {
    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError> {
        self.client().await?.index_exists(index).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn get_mappings(&self, index: &str) -> Result<serde_json::Value, SearchEngineError> {
        let info = self.client().await?.get_index(index).await?;

        // `GET /{index}` keys the answer by index name
        Ok(info
            .get(index)
            .and_then(|entry| entry.get("mappings"))
            .cloned()
            .unwrap_or_else(|| serde_json::json!({})))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn create_index(
        &self,
        index: &str,
        mappings: Option<&serde_json::Value>,
    ) -> Result<(), SearchEngineError> {
        self.client().await?.create_index(index, mappings).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn delete_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.client().await?.delete_index(index).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn refresh_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.client().await?.refresh_index(index).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn index_document(
        &self,
        index: &str,
        document: &serde_json::Value,
    ) -> Result<String, SearchEngineError> {
        let response = self.client().await?.index_document(index, document).await?;
        Ok(response.id)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, num_documents = documents.len()))]
    async fn bulk_index(
        &self,
        index: &str,
        documents: &[serde_json::Value],
    ) -> Result<(), SearchEngineError> {
        self.client().await?.bulk_index(index, documents).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %field))]
    async fn sample_field_values(
        &self,
        index: &str,
        field: &str,
        size: usize,
    ) -> Result<Vec<String>, SearchEngineError> {
        let body = EsProductQueryBuilder::field_values_agg_query(field, size);
        let response = self.client().await?.search(index, &body).await?;

        let values = response
            .aggregations
            .as_ref()
            .and_then(|aggs| aggs["values"]["buckets"].as_array())
            .map(|buckets| {
                buckets
                    .iter()
                    .filter_map(|bucket| bucket["key"].as_str())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(values)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %query_text))]
    async fn search_planned(
        &self,
        index: &str,
        query_text: &str,
        plan: &QueryPlan,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        let body = EsProductQueryBuilder::planned_search_query(query_text, plan);
        tracing::debug!(body = %body, "Executing planned search");

        let response = self.client().await?.search(index, &body).await?;
        Ok(Self::hits(response))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, category = %params.category))]
    async fn search_by_category(
        &self,
        index: &str,
        params: &CategorySearchParams,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        let body = EsProductQueryBuilder::category_search_query(params);
        let response = self.client().await?.search(index, &body).await?;
        Ok(Self::hits(response))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %brand))]
    async fn search_by_brand(
        &self,
        index: &str,
        brand: &str,
    ) -> Result<Vec<ProductHit>, SearchEngineError> {
        let body = EsProductQueryBuilder::brand_search_query(brand);
        let response = self.client().await?.search(index, &body).await?;
        Ok(Self::hits(response))
    }
}
