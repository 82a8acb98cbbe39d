// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{CategorySearchParams, NewProduct};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The tool facade the stdio transport dispatches to. Every operation returns a
/// human-readable string; failures are folded into the string rather than
/// propagated, so nothing ever throws across the transport boundary.
#[async_trait::async_trait]
pub trait ProductSearchService: Send + Sync {
    /// Free-text search with LLM query planning. The reserved query
    /// `DELETE_INDEX` bypasses the pipeline and drops the index instead.
    async fn search(&self, query: &str, index: &str) -> String;

    async fn search_products_by_category(
        &self,
        params: CategorySearchParams,
        index: &str,
    ) -> String;

    async fn search_products_by_brand(&self, brand: &str, index: &str) -> String;

    /// Indexes one product document, creating the index (with the product
    /// mapping) when it does not exist yet
    async fn index_product(&self, product: NewProduct, index: &str) -> String;

    /// Drop-and-recreate a generic test index seeded with sample documents
    async fn create_test_index(&self, num_documents: usize, index: &str) -> String;

    /// Drop-and-recreate the e-commerce index with an explicit mapping and the
    /// seeded product catalog
    async fn create_ecommerce_test_index(&self, num_products: usize, index: &str) -> String;
}
