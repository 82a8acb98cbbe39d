// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search::QueryPlan;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Total parser for LLM planning replies. Accepts a bare JSON object or one
/// wrapped in a ```` ```json ```` fence; anything else yields the default plan
/// for the original query.
pub struct PlanParser {}

impl PlanParser {
    pub fn parse(reply: &str, original_query: &str) -> QueryPlan {
        let reply = reply.trim();

        if let Ok(plan) = serde_json::from_str::<QueryPlan>(reply) {
            return plan;
        }

        if let Some(fenced) = Self::extract_json_fence(reply)
            && let Ok(plan) = serde_json::from_str::<QueryPlan>(fenced)
        {
            return plan;
        }

        tracing::warn!(%original_query, "Could not parse planner reply, using default plan");
        QueryPlan::fallback(original_query)
    }

    /// First ```` ```json ```` fenced block, if any
    fn extract_json_fence(reply: &str) -> Option<&str> {
        let start = reply.find("```json\n")? + "```json\n".len();
        let end = reply[start..].find("\n```")?;
        Some(&reply[start..start + end])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
