// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod errors;
mod product;
mod product_hit;
mod product_mappings;
mod query_plan;
mod schema_snapshot;
mod vocabularies;

pub use errors::*;
pub use product::*;
pub use product_hit::*;
pub use product_mappings::*;
pub use query_plan::*;
pub use schema_snapshot::*;
pub use vocabularies::*;
