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

use super::utils::{FakeChatCompletionService, FakeProductIndexRepo, product_hit};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_sentinel_drops_existing_index() {
    let harness = ProductSearchHarness::builder()
        .existing_index("ecommerce")
        .build();

    let reply = harness.service.search("DELETE_INDEX", "ecommerce").await;

    assert_eq!(reply, "Successfully deleted index 'ecommerce'.");
    harness.assert_events(&["exists:ecommerce", "delete:ecommerce"]);
}

#[test_log::test(tokio::test)]
async fn test_delete_sentinel_on_missing_index() {
    let harness = ProductSearchHarness::builder().build();

    let reply = harness.service.search("DELETE_INDEX", "ecommerce").await;

    assert_eq!(reply, "Index 'ecommerce' does not exist.");
    harness.assert_events(&["exists:ecommerce"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_search_runs_the_full_planning_pipeline() {
    let harness = ProductSearchHarness::builder()
        .existing_index("ecommerce")
        .llm_reply(
            r#"{
                "should_expand": true,
                "expanded_query": "wireless bluetooth headphones",
                "ranking_algorithm": "bm25",
                "filters": {"categories": ["Electronics"]},
                "explanation": "Expanded for synonyms."
            }"#,
        )
        .hits(vec![product_hit("Premium Wireless Headphones", 199.99, 4.7)])
        .build();

    let reply = harness.service.search("headphones", "ecommerce").await;

    assert!(reply.starts_with("Search results for: headphones\n\nQuery plan:\n"));
    assert!(reply.contains("Expanded for synonyms."));
    assert!(reply.contains("\n\nResults:\nProduct 1:\nName: Premium Wireless Headphones\n"));

    // The engine saw the expanded query, not the raw one
    assert!(
        harness
            .events()
            .contains(&"search:ecommerce:wireless bluetooth headphones".to_string())
    );
}

#[test_log::test(tokio::test)]
async fn test_search_without_hits_echoes_the_plan() {
    let harness = ProductSearchHarness::builder()
        .llm_reply(r#"{"explanation": "Nothing special."}"#)
        .build();

    let reply = harness.service.search("unobtainium", "ecommerce").await;

    assert!(reply.starts_with("No products found for query: unobtainium\n\nQuery plan: {"));
    assert!(reply.contains("Nothing special."));
}

#[test_log::test(tokio::test)]
async fn test_search_folds_engine_failure_into_empty_results() {
    let harness = ProductSearchHarness::builder()
        .llm_reply("{}")
        .failing_searches()
        .build();

    let reply = harness.service.search("headphones", "ecommerce").await;

    assert!(reply.starts_with("No products found for query: headphones"));
}

#[test_log::test(tokio::test)]
async fn test_search_with_unparseable_plan_still_searches() {
    let harness = ProductSearchHarness::builder()
        .llm_reply("I'd rather not produce JSON today.")
        .hits(vec![product_hit("Yoga Mat", 39.99, 4.4)])
        .build();

    let reply = harness.service.search("mat", "ecommerce").await;

    assert!(reply.contains(QueryPlan::FALLBACK_EXPLANATION));
    assert!(reply.contains("Name: Yoga Mat"));
    assert!(harness.events().contains(&"search:ecommerce:mat".to_string()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_category_search_formats_and_folds_errors() {
    let harness = ProductSearchHarness::builder()
        .hits(vec![product_hit("Cast Iron Skillet", 34.99, 4.8)])
        .build();

    let params = CategorySearchParams {
        category: "Kitchen".to_string(),
        ..Default::default()
    };
    let reply = harness
        .service
        .search_products_by_category(params.clone(), "ecommerce")
        .await;

    assert!(reply.starts_with("Products in category 'Kitchen':\n"));
    assert!(reply.contains("Name: Cast Iron Skillet"));

    let failing = ProductSearchHarness::builder().failing_searches().build();
    let reply = failing
        .service
        .search_products_by_category(params, "ecommerce")
        .await;

    assert_eq!(
        reply,
        "Error searching for products in category 'Kitchen': engine unavailable"
    );
}

#[test_log::test(tokio::test)]
async fn test_brand_search_without_matches() {
    let harness = ProductSearchHarness::builder().build();

    let reply = harness
        .service
        .search_products_by_brand("Acme", "ecommerce")
        .await;

    assert_eq!(reply, "No products found from brand 'Acme'.");
    harness.assert_events(&["search_brand:ecommerce:Acme"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_index_product_creates_missing_index_with_mapping() {
    let harness = ProductSearchHarness::builder().build();

    let reply = harness
        .service
        .index_product(test_product("Widget"), "ecommerce")
        .await;

    assert_eq!(reply, "Product indexed successfully with ID: fake-id-1");
    harness.assert_events(&[
        "exists:ecommerce",
        "create:ecommerce:mapped",
        "doc:ecommerce:Widget",
    ]);
}

#[test_log::test(tokio::test)]
async fn test_index_product_reuses_existing_index() {
    let harness = ProductSearchHarness::builder()
        .existing_index("ecommerce")
        .build();

    harness
        .service
        .index_product(test_product("Widget"), "ecommerce")
        .await;

    harness.assert_events(&["exists:ecommerce", "doc:ecommerce:Widget"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_test_index_reseeds_from_scratch() {
    let harness = ProductSearchHarness::builder()
        .existing_index("test_documents")
        .build();

    let reply = harness
        .service
        .create_test_index(10, "test_documents")
        .await;

    assert_eq!(reply, "Created test index 'test_documents' with 10 documents");
    harness.assert_events(&[
        "exists:test_documents",
        "delete:test_documents",
        "create:test_documents:unmapped",
        "bulk:test_documents:10",
        "refresh:test_documents",
    ]);
}

#[test_log::test(tokio::test)]
async fn test_create_ecommerce_test_index_treats_count_as_lower_bound() {
    let harness = ProductSearchHarness::builder().build();

    // Fewer than the built-in catalog still seeds the whole catalog
    let reply = harness
        .service
        .create_ecommerce_test_index(20, "ecommerce")
        .await;
    assert_eq!(reply, "Created e-commerce test index 'ecommerce' with 29 products");

    let reply = harness
        .service
        .create_ecommerce_test_index(35, "ecommerce")
        .await;
    assert_eq!(reply, "Created e-commerce test index 'ecommerce' with 35 products");

    assert!(
        harness
            .events()
            .contains(&"create:ecommerce:mapped".to_string())
    );
    assert!(harness.events().contains(&"bulk:ecommerce:29".to_string()));
    assert!(harness.events().contains(&"bulk:ecommerce:35".to_string()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn test_product(name: &str) -> NewProduct {
    NewProduct {
        product_name: name.to_string(),
        description: format!("{name} description."),
        price: 9.99,
        brand: "Acme".to_string(),
        category: "Tools".to_string(),
        rating: 4.0,
        in_stock: true,
        metadata: serde_json::Map::new(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct ProductSearchHarness {
    service: Arc<dyn ProductSearchService>,
    events: Arc<Mutex<Vec<String>>>,
}

impl ProductSearchHarness {
    fn builder() -> ProductSearchHarnessBuilder {
        ProductSearchHarnessBuilder::default()
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn assert_events(&self, expected: &[&str]) {
        let expected = expected.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(self.events(), expected);
    }
}

#[derive(Default)]
struct ProductSearchHarnessBuilder {
    existing_indices: Vec<String>,
    llm_reply: Option<String>,
    hits: Vec<ProductHit>,
    failing_searches: bool,
}

impl ProductSearchHarnessBuilder {
    fn existing_index(mut self, index: &str) -> Self {
        self.existing_indices.push(index.to_string());
        self
    }

    fn llm_reply(mut self, reply: &str) -> Self {
        self.llm_reply = Some(reply.to_string());
        self
    }

    fn hits(mut self, hits: Vec<ProductHit>) -> Self {
        self.hits = hits;
        self
    }

    fn failing_searches(mut self) -> Self {
        self.failing_searches = true;
        self
    }

    fn build(self) -> ProductSearchHarness {
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut repo = FakeProductIndexRepo::new(events.clone()).with_hits(self.hits);
        for index in &self.existing_indices {
            repo = repo.with_index(index);
        }
        if self.failing_searches {
            repo = repo.with_failing_searches();
        }

        let chat_svc = match &self.llm_reply {
            Some(reply) => FakeChatCompletionService::replying(reply),
            None => FakeChatCompletionService::unconfigured(),
        };

        let catalog = dill::CatalogBuilder::new()
            .add_value(repo)
            .bind::<dyn ProductIndexRepository, FakeProductIndexRepo>()
            .add_value(chat_svc)
            .bind::<dyn ChatCompletionService, FakeChatCompletionService>()
            .add::<IndexIntrospectorImpl>()
            .add::<QueryPlannerImpl>()
            .add::<ProductSearchServiceImpl>()
            .build();

        ProductSearchHarness {
            service: catalog.get_one().unwrap(),
            events,
        }
    }
}
