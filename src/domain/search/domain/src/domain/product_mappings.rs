// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::fields;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ProductIndexMappings {}

impl ProductIndexMappings {
    /// Explicit mapping declared before seeding a product index. Without it the
    /// engine infers `brand`/`category`/`tags` as analyzed text, which silently
    /// breaks exact-token filters and aggregations.
    pub fn ecommerce() -> serde_json::Value {
        serde_json::json!({
            "mappings": {
                "properties": {
                    fields::PRODUCT_NAME: { "type": "text" },
                    fields::DESCRIPTION: { "type": "text" },
                    fields::PRICE: { "type": "float" },
                    fields::BRAND: { "type": "keyword" },
                    fields::CATEGORY: { "type": "keyword" },
                    fields::RATING: { "type": "float" },
                    fields::IN_STOCK: { "type": "boolean" },
                    fields::TAGS: { "type": "keyword" },
                }
            }
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
