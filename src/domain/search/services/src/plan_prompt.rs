// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search::{FilterVocabularies, SchemaSnapshot};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Renders the planning prompt. The schema and vocabularies sections ground
/// the model in the live index: categorical filter values not present in the
/// vocabularies are explicitly forbidden.
pub struct PlanPrompt {}

impl PlanPrompt {
    pub fn render(query: &str, schema: &SchemaSnapshot, vocabularies: &FilterVocabularies) -> String {
        let schema_info = serde_json::to_string_pretty(&schema.to_prompt_json())
            .unwrap_or_else(|_| "{}".to_string());
        let available_values_info =
            serde_json::to_string_pretty(vocabularies).unwrap_or_else(|_| "{}".to_string());

        format!(
            r#"
You are a search query planner for an e-commerce platform. Given a user's search query, determine the best search strategy.

Here is the schema of the index you're searching:
{schema_info}

Here are the available values in the data:
{available_values_info}

IMPORTANT: When filtering by categories, brands, or tags, ONLY use values from the lists provided above.

Analyze the query and provide a JSON response with the following fields:
- should_expand: boolean indicating if query expansion would be beneficial
- expanded_query: if should_expand is true, provide an expanded version of the query
- ranking_algorithm: recommend one of ["bm25", "vector_similarity", "hybrid"]
- filters: any filters that should be applied based on the query, including:
  - price_range: optional object with min and max price if mentioned
  - categories: optional array of product categories (MUST be from the available categories list)
  - brands: optional array of brand names (MUST be from the available brands list)
  - ratings: optional minimum rating (1-5)
  - in_stock: optional boolean for availability
  - tags: optional array of tags to filter by (MUST be from the common_tags list)
- search_fields: array of fields to prioritize in search (e.g., ["product_name", "description", "brand"])
- sort_by: optional field to sort results by (e.g., "price.asc", "rating.desc", "relevance")
- explanation: brief explanation of your recommendations

Use the schema information to ensure that:
1. You only reference fields that actually exist in the index
2. You use the correct field types (text, keyword, numeric) for filtering and sorting
3. You optimize the search strategy based on the available fields and their types
4. You ONLY use category, brand, and tag values from the provided lists

User query: {query}

Respond with a valid JSON object only.
"#
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
