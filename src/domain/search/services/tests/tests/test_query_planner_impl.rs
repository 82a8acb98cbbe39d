// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use shopsearch_search::*;
use shopsearch_search_services::*;

use super::utils::{FakeChatCompletionService, FakeProductIndexRepo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_planner_grounds_prompt_in_live_vocabularies() {
    let harness = QueryPlannerHarness::new(
        FakeProductIndexRepo::new(Arc::new(Mutex::new(Vec::new())))
            .with_index("ecommerce")
            .with_field_values(fields::CATEGORY, &["Electronics", "Kitchen"])
            .with_field_values(fields::BRAND, &["SoundMaster"])
            .with_field_values(fields::TAGS, &["wireless"]),
        FakeChatCompletionService::replying(r#"{"explanation": "ok"}"#),
    );

    let plan = harness.planner.plan_query("ecommerce", "headphones").await;
    assert_eq!(plan.explanation, "ok");

    let prompt = harness.last_prompt();
    assert!(prompt.contains(r#""Electronics""#));
    assert!(prompt.contains(r#""SoundMaster""#));
    assert!(prompt.contains(r#""wireless""#));
    assert!(prompt.contains("User query: headphones"));
}

#[test_log::test(tokio::test)]
async fn test_planner_on_missing_index_uses_default_schema_and_empty_vocabularies() {
    let harness = QueryPlannerHarness::new(
        FakeProductIndexRepo::new(Arc::new(Mutex::new(Vec::new()))),
        FakeChatCompletionService::replying("{}"),
    );

    harness.planner.plan_query("missing", "laptop").await;

    let prompt = harness.last_prompt();
    assert!(prompt.contains(r#""product_name""#));
    assert!(prompt.contains(r#""categories": []"#));
    assert!(prompt.contains(r#""brands": []"#));
}

#[test_log::test(tokio::test)]
async fn test_planner_falls_back_when_llm_is_unconfigured() {
    let harness = QueryPlannerHarness::new(
        FakeProductIndexRepo::new(Arc::new(Mutex::new(Vec::new()))),
        FakeChatCompletionService::unconfigured(),
    );

    let plan = harness.planner.plan_query("ecommerce", "laptop").await;

    assert!(!plan.should_expand);
    assert_eq!(plan.ranking_algorithm, RankingAlgorithm::Bm25);
    assert_eq!(plan.explanation, QueryPlan::FALLBACK_EXPLANATION);
}

#[test_log::test(tokio::test)]
async fn test_planner_accepts_fenced_reply() {
    let harness = QueryPlannerHarness::new(
        FakeProductIndexRepo::new(Arc::new(Mutex::new(Vec::new()))),
        FakeChatCompletionService::replying(
            "Here you go:\n```json\n{\"ranking_algorithm\": \"hybrid\"}\n```\n",
        ),
    );

    let plan = harness.planner.plan_query("ecommerce", "laptop").await;

    assert_eq!(plan.ranking_algorithm, RankingAlgorithm::Hybrid);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct QueryPlannerHarness {
    planner: Arc<dyn QueryPlanner>,
    chat_svc: Arc<FakeChatCompletionService>,
}

impl QueryPlannerHarness {
    fn new(repo: FakeProductIndexRepo, chat_svc: FakeChatCompletionService) -> Self {
        let catalog = dill::CatalogBuilder::new()
            .add_value(repo)
            .bind::<dyn ProductIndexRepository, FakeProductIndexRepo>()
            .add_value(chat_svc)
            .bind::<dyn ChatCompletionService, FakeChatCompletionService>()
            .add::<IndexIntrospectorImpl>()
            .add::<QueryPlannerImpl>()
            .build();

        Self {
            planner: catalog.get_one().unwrap(),
            chat_svc: catalog.get_one().unwrap(),
        }
    }

    fn last_prompt(&self) -> String {
        self.chat_svc.last_prompt.lock().unwrap().clone().unwrap()
    }
}
