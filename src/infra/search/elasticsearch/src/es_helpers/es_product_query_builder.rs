// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::{Value, json};
use shopsearch_search::{
    CategorySearchParams,
    PlanFilters,
    QueryPlan,
    RankingAlgorithm,
    SEARCH_RESULT_SIZE,
    fields,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Compiles query plans and fixed-shape tool parameters into Elasticsearch
/// request bodies. Compilation is total: every plan produces a valid body, and
/// clauses the plan cannot support are dropped rather than rejected.
pub struct EsProductQueryBuilder {}

impl EsProductQueryBuilder {
    /// Body for the plan-driven `search` tool.
    ///
    /// The ranking algorithm selects the `should` clause shape: `bm25`,
    /// `hybrid`, and anything unrecognized produce plain per-field matches,
    /// while `vector_similarity` degrades to boosted BM25 over the product
    /// fields until dense vectors land in the index.
    pub fn planned_search_query(query_text: &str, plan: &QueryPlan) -> Value {
        let effective_text = plan.effective_query_text(query_text);

        let should_clauses: Vec<Value> = match plan.ranking_algorithm {
            RankingAlgorithm::VectorSimilarity => vec![
                json!({"match": {fields::PRODUCT_NAME: {"query": effective_text, "boost": 3}}}),
                json!({"match": {fields::DESCRIPTION: {"query": effective_text, "boost": 1}}}),
                json!({"match": {fields::BRAND: {"query": effective_text, "boost": 2}}}),
                json!({"match": {fields::CATEGORY: {"query": effective_text, "boost": 2}}}),
            ],
            RankingAlgorithm::Bm25 | RankingAlgorithm::Hybrid | RankingAlgorithm::Unknown => plan
                .effective_search_fields()
                .iter()
                .map(|field| json!({"match": {*field: effective_text}}))
                .collect(),
        };

        let mut bool_query = serde_json::Map::new();
        bool_query.insert("should".to_string(), Value::Array(should_clauses));

        if let Some(filters) = &plan.filters {
            let filter_clauses = Self::filter_clauses(filters);
            if !filter_clauses.is_empty() {
                bool_query.insert("filter".to_string(), Value::Array(filter_clauses));
            }
        }

        let mut body = json!({
            "query": {
                "bool": bool_query,
            },
            "size": SEARCH_RESULT_SIZE,
        });

        if let Some(sort) = plan.sort_by.as_deref().and_then(Self::sort_clause) {
            body["sort"] = sort;
        }

        body
    }

    /// Body for the `search_products_by_category` tool: exact category match
    /// with price and rating windows, ranked best and cheapest first.
    pub fn category_search_query(params: &CategorySearchParams) -> Value {
        let mut filter_clauses = vec![
            json!({"range": {fields::PRICE: {"gte": params.min_price, "lte": params.max_price}}}),
            json!({"range": {fields::RATING: {"gte": params.min_rating}}}),
        ];
        if params.in_stock_only {
            filter_clauses.push(json!({"term": {fields::IN_STOCK: true}}));
        }

        json!({
            "query": {
                "bool": {
                    "must": [
                        {"term": {fields::CATEGORY: params.category}},
                    ],
                    "filter": filter_clauses,
                }
            },
            "sort": [
                {fields::RATING: {"order": "desc"}},
                {fields::PRICE: {"order": "asc"}},
            ],
            "size": SEARCH_RESULT_SIZE,
        })
    }

    /// Body for the `search_products_by_brand` tool: exact brand match, best
    /// rated first.
    pub fn brand_search_query(brand: &str) -> Value {
        json!({
            "query": {
                "term": {fields::BRAND: brand},
            },
            "sort": [
                {fields::RATING: {"order": "desc"}},
            ],
            "size": SEARCH_RESULT_SIZE,
        })
    }

    /// Terms aggregation used to sample the distinct values of a keyword field
    pub fn field_values_agg_query(field: &str, size: usize) -> Value {
        json!({
            "size": 0,
            "aggs": {
                "values": {
                    "terms": {
                        "field": field,
                        "size": size,
                    }
                }
            }
        })
    }

    // Filters compile in a fixed order: price range, categories, brands,
    // ratings, in_stock, tags, then any extra keys the planner invented.
    // Empty `terms` lists are skipped since they would match nothing.
    fn filter_clauses(filters: &PlanFilters) -> Vec<Value> {
        let mut clauses = Vec::new();

        if let Some(price_range) = &filters.price_range {
            let mut range = serde_json::Map::new();
            if let Some(min) = price_range.min {
                range.insert("gte".to_string(), json!(min));
            }
            if let Some(max) = price_range.max {
                range.insert("lte".to_string(), json!(max));
            }
            if !range.is_empty() {
                clauses.push(json!({"range": {fields::PRICE: range}}));
            }
        }

        if let Some(categories) = &filters.categories
            && !categories.is_empty()
        {
            clauses.push(json!({"terms": {fields::CATEGORY: categories}}));
        }

        if let Some(brands) = &filters.brands
            && !brands.is_empty()
        {
            clauses.push(json!({"terms": {fields::BRAND: brands}}));
        }

        if let Some(min_rating) = filters.ratings {
            clauses.push(json!({"range": {fields::RATING: {"gte": min_rating}}}));
        }

        if filters.in_stock == Some(true) {
            clauses.push(json!({"term": {fields::IN_STOCK: true}}));
        }

        if let Some(tags) = &filters.tags
            && !tags.is_empty()
        {
            clauses.push(json!({"terms": {fields::TAGS: tags}}));
        }

        for (field, value) in &filters.extra {
            match value {
                Value::Array(values) => {
                    if !values.is_empty() {
                        clauses.push(json!({"terms": {field: values}}));
                    }
                }
                scalar => {
                    clauses.push(json!({"term": {field: scalar}}));
                }
            }
        }

        clauses
    }

    // `<field>.<asc|desc>` becomes a sort clause; `relevance` and anything
    // malformed leave the body unsorted (score order).
    fn sort_clause(sort_by: &str) -> Option<Value> {
        if sort_by == QueryPlan::SORT_BY_RELEVANCE {
            return None;
        }
        let (field, order) = sort_by.rsplit_once('.')?;
        if field.is_empty() || !matches!(order, "asc" | "desc") {
            return None;
        }
        Some(json!([{field: {"order": order}}]))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
