// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod index_introspector_impl;
mod plan_parser;
mod plan_prompt;
mod product_search_service_impl;
mod query_planner_impl;
mod result_formatter;
mod test_fixtures;

pub use index_introspector_impl::*;
pub use plan_parser::*;
pub use plan_prompt::*;
pub use product_search_service_impl::*;
pub use query_planner_impl::*;
pub use result_formatter::*;
pub use test_fixtures::*;
