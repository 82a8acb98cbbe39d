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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Samples the live index through the repository. Every engine failure is
/// logged and absorbed: the planner works with a default schema and empty
/// vocabularies rather than seeing an error.
#[dill::component(pub)]
#[dill::interface(dyn IndexIntrospector)]
pub struct IndexIntrospectorImpl {
    product_index_repo: Arc<dyn ProductIndexRepository>,
}

impl IndexIntrospectorImpl {
    async fn sample_vocabulary(&self, index: &str, field: &str) -> Vec<String> {
        match self
            .product_index_repo
            .sample_field_values(index, field, VOCABULARY_SAMPLE_SIZE)
            .await
        {
            Ok(values) => values,
            Err(e) => {
                tracing::error!(error = %e, %index, %field, "Failed to sample field values");
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl IndexIntrospector for IndexIntrospectorImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn get_schema(&self, index: &str) -> SchemaSnapshot {
        match self.product_index_repo.index_exists(index).await {
            Ok(true) => {}
            Ok(false) => return SchemaSnapshot::default(),
            Err(e) => {
                tracing::error!(error = %e, %index, "Failed to check index existence");
                return SchemaSnapshot::default();
            }
        }

        match self.product_index_repo.get_mappings(index).await {
            Ok(mappings) => {
                let snapshot = SchemaSnapshot::from_engine_mappings(&mappings);
                if snapshot.is_empty() {
                    SchemaSnapshot::default()
                } else {
                    snapshot
                }
            }
            Err(e) => {
                tracing::error!(error = %e, %index, "Failed to read index mappings");
                SchemaSnapshot::default()
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn get_vocabularies(&self, index: &str) -> FilterVocabularies {
        match self.product_index_repo.index_exists(index).await {
            Ok(true) => {}
            Ok(false) => return FilterVocabularies::default(),
            Err(e) => {
                tracing::error!(error = %e, %index, "Failed to check index existence");
                return FilterVocabularies::default();
            }
        }

        FilterVocabularies {
            categories: self.sample_vocabulary(index, fields::CATEGORY).await,
            brands: self.sample_vocabulary(index, fields::BRAND).await,
            common_tags: self.sample_vocabulary(index, fields::TAGS).await,
        }
    }
}
