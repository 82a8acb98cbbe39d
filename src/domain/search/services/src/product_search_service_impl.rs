// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use shopsearch_search::*;

use crate::{ResultFormatter, SeedDocuments};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The tool facade. Every operation resolves to a human-readable string:
/// engine and planner failures are folded into the reply, so the transport
/// never sees an error from this layer.
#[dill::component(pub)]
#[dill::interface(dyn ProductSearchService)]
pub struct ProductSearchServiceImpl {
    product_index_repo: Arc<dyn ProductIndexRepository>,
    query_planner: Arc<dyn QueryPlanner>,
}

impl ProductSearchServiceImpl {
    async fn delete_index_for(&self, index: &str) -> String {
        match self.product_index_repo.index_exists(index).await {
            Ok(true) => match self.product_index_repo.delete_index(index).await {
                Ok(()) => format!("Successfully deleted index '{index}'."),
                Err(e) => format!("Error deleting index '{index}': {e}"),
            },
            Ok(false) => format!("Index '{index}' does not exist."),
            Err(e) => format!("Error deleting index '{index}': {e}"),
        }
    }

    /// Drop-and-recreate, then seed and refresh so the documents are
    /// immediately searchable
    async fn reseed_index(
        &self,
        index: &str,
        mappings: Option<&serde_json::Value>,
        documents: &[serde_json::Value],
    ) -> Result<(), SearchEngineError> {
        if self.product_index_repo.index_exists(index).await? {
            self.product_index_repo.delete_index(index).await?;
        }
        self.product_index_repo.create_index(index, mappings).await?;
        self.product_index_repo.bulk_index(index, documents).await?;
        self.product_index_repo.refresh_index(index).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductSearchService for ProductSearchServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%index, %query))]
    async fn search(&self, query: &str, index: &str) -> String {
        if query == DELETE_INDEX_SENTINEL {
            return self.delete_index_for(index).await;
        }

        let plan = self.query_planner.plan_query(index, query).await;

        let hits = match self
            .product_index_repo
            .search_planned(index, query, &plan)
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                tracing::error!(error = %e, %index, "Search failed");
                Vec::new()
            }
        };

        ResultFormatter::search_results(query, &plan, &hits)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, category = %params.category))]
    async fn search_products_by_category(
        &self,
        params: CategorySearchParams,
        index: &str,
    ) -> String {
        match self.product_index_repo.search_by_category(index, &params).await {
            Ok(hits) => ResultFormatter::category_results(&params, &hits),
            Err(e) => format!(
                "Error searching for products in category '{}': {e}",
                params.category
            ),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %brand))]
    async fn search_products_by_brand(&self, brand: &str, index: &str) -> String {
        match self.product_index_repo.search_by_brand(index, brand).await {
            Ok(hits) => ResultFormatter::brand_results(brand, &hits),
            Err(e) => format!("Error searching for products from brand '{brand}': {e}"),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn index_product(&self, product: NewProduct, index: &str) -> String {
        let document = product.into_document();

        let result = async {
            if !self.product_index_repo.index_exists(index).await? {
                self.product_index_repo
                    .create_index(index, Some(&ProductIndexMappings::ecommerce()))
                    .await?;
            }
            self.product_index_repo.index_document(index, &document).await
        }
        .await;

        match result {
            Ok(id) => format!("Product indexed successfully with ID: {id}"),
            Err(e) => format!("Failed to index product: {e}"),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %num_documents))]
    async fn create_test_index(&self, num_documents: usize, index: &str) -> String {
        let documents = SeedDocuments::generic(num_documents);

        // The generic test index relies on inferred mappings
        match self.reseed_index(index, None, &documents).await {
            Ok(()) => format!(
                "Created test index '{index}' with {} documents",
                documents.len()
            ),
            Err(e) => format!("Error creating test index '{index}': {e}"),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %num_products))]
    async fn create_ecommerce_test_index(&self, num_products: usize, index: &str) -> String {
        let products = SeedDocuments::ecommerce(num_products);

        match self
            .reseed_index(index, Some(&ProductIndexMappings::ecommerce()), &products)
            .await
        {
            Ok(()) => format!(
                "Created e-commerce test index '{index}' with {} products",
                products.len()
            ),
            Err(e) => format!("Error creating e-commerce test index '{index}': {e}"),
        }
    }
}
