// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search_elasticsearch::EsProductIndexRepo;
use shopsearch_search_openai::OpenAiChatCompletionService;
use shopsearch_search_services::{
    IndexIntrospectorImpl,
    ProductSearchServiceImpl,
    QueryPlannerImpl,
};

use crate::ServerConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_catalog(config: &ServerConfig) -> dill::Catalog {
    let mut b = dill::CatalogBuilder::new();

    b.add_value(config.es.clone());
    b.add_value(config.openai.clone());

    b.add::<EsProductIndexRepo>();
    b.add::<OpenAiChatCompletionService>();

    b.add::<IndexIntrospectorImpl>();
    b.add::<QueryPlannerImpl>();
    b.add::<ProductSearchServiceImpl>();

    b.build()
}
