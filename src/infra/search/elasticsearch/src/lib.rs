// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) mod es_client;
pub(crate) mod es_helpers;

mod es_product_index_repo;
mod es_search_config;

pub use es_helpers::EsProductQueryBuilder;
pub use es_product_index_repo::*;
pub use es_search_config::*;
