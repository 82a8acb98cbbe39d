// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::QueryPlan;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Turns a natural-language query into a structured plan. Total: an LLM failure
/// or unparseable reply yields the default plan, never an error.
#[async_trait::async_trait]
pub trait QueryPlanner: Send + Sync {
    async fn plan_query(&self, index: &str, query: &str) -> QueryPlan;
}
