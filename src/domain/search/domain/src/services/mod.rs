// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod chat_completion_service;
mod index_introspector;
mod product_search_service;
mod query_planner;

pub use chat_completion_service::*;
pub use index_introspector::*;
pub use product_search_service::*;
pub use query_planner::*;
