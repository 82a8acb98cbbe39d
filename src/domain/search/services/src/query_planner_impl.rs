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

use crate::{PlanParser, PlanPrompt};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Low temperature keeps plans deterministic enough to reproduce in demos
const PLANNING_TEMPERATURE: f32 = 0.1;

/// LLM-backed planner: introspects the index, renders the grounded prompt, and
/// parses the reply. Total by construction, as an LLM or parse failure resolves
/// to the default plan.
#[dill::component(pub)]
#[dill::interface(dyn QueryPlanner)]
pub struct QueryPlannerImpl {
    index_introspector: Arc<dyn IndexIntrospector>,
    chat_completion_svc: Arc<dyn ChatCompletionService>,
}

#[async_trait::async_trait]
impl QueryPlanner for QueryPlannerImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%index, %query))]
    async fn plan_query(&self, index: &str, query: &str) -> QueryPlan {
        let schema = self.index_introspector.get_schema(index).await;
        let vocabularies = self.index_introspector.get_vocabularies(index).await;

        let prompt = PlanPrompt::render(query, &schema, &vocabularies);

        match self
            .chat_completion_svc
            .complete(&prompt, PLANNING_TEMPERATURE)
            .await
        {
            Ok(reply) => {
                let plan = PlanParser::parse(&reply, query);
                tracing::debug!(plan = ?plan, "Generated query plan");
                plan
            }
            Err(e) => {
                tracing::warn!(error = %e, %query, "LLM completion failed, using default plan");
                QueryPlan::fallback(query)
            }
        }
    }
}
