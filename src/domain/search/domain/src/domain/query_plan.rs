// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_SEARCH_FIELDS;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Structured search intent produced by the LLM planner and consumed by the query
/// compiler. All fields are optional on the wire: the planner tolerates partial
/// replies and the compiler skips what it cannot use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPlan {
    /// When true, `expanded_query` replaces the user's query text in match clauses
    #[serde(default)]
    pub should_expand: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_query: Option<String>,

    #[serde(default)]
    pub ranking_algorithm: RankingAlgorithm,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<PlanFilters>,

    /// Ordered fields to include as `should` match clauses. `None` means the
    /// default product fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Vec<String>>,

    /// Either `relevance` or `<field>.<asc|desc>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Planner's rationale, echoed to the caller even when the rest of the plan
    /// turns out to be over-ambitious
    #[serde(default)]
    pub explanation: String,
}

impl QueryPlan {
    pub const FALLBACK_EXPLANATION: &'static str =
        "Failed to parse LLM response, using default settings.";

    /// The safe default plan used whenever the LLM reply cannot be understood
    pub fn fallback(query: &str) -> Self {
        Self {
            should_expand: false,
            expanded_query: Some(query.to_string()),
            ranking_algorithm: RankingAlgorithm::Bm25,
            filters: None,
            search_fields: Some(
                DEFAULT_SEARCH_FIELDS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            sort_by: Some(Self::SORT_BY_RELEVANCE.to_string()),
            explanation: Self::FALLBACK_EXPLANATION.to_string(),
        }
    }

    pub const SORT_BY_RELEVANCE: &'static str = "relevance";

    pub fn effective_search_fields(&self) -> Vec<&str> {
        match &self.search_fields {
            Some(fields) => fields.iter().map(String::as_str).collect(),
            None => DEFAULT_SEARCH_FIELDS.to_vec(),
        }
    }

    pub fn effective_query_text<'a>(&'a self, original_query: &'a str) -> &'a str {
        if self.should_expand {
            self.expanded_query.as_deref().unwrap_or(original_query)
        } else {
            original_query
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ranking algorithm named by the plan. Anything the planner invents beyond the
/// recognized set degrades to plain BM25 at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingAlgorithm {
    #[default]
    Bm25,
    VectorSimilarity,
    Hybrid,
    #[serde(other)]
    Unknown,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,

    /// Minimum rating, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f64>,

    /// `Some(true)` requires stock; `Some(false)` and `None` leave availability
    /// unconstrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Every unrecognized filter key compiles to a generic exact-term leaf:
    /// list values become `terms`, scalars become `term`
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
