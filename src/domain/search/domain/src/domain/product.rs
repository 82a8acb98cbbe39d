// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Field names of the indexed product entity
pub mod fields {
    pub const PRODUCT_NAME: &str = "product_name";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const BRAND: &str = "brand";
    pub const CATEGORY: &str = "category";
    pub const RATING: &str = "rating";
    pub const IN_STOCK: &str = "in_stock";
    pub const TAGS: &str = "tags";
    pub const SCORE: &str = "score";
}

/// Fields matched by default when a plan does not name its own `search_fields`
pub const DEFAULT_SEARCH_FIELDS: [&str; 4] = [
    fields::PRODUCT_NAME,
    fields::DESCRIPTION,
    fields::BRAND,
    fields::CATEGORY,
];

/// Result window for every search operation
pub const SEARCH_RESULT_SIZE: usize = 10;

/// Reserved query string that makes the `search` tool drop the index instead of
/// searching it. Used by test harnesses to reset state through the same channel.
pub const DELETE_INDEX_SENTINEL: &str = "DELETE_INDEX";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A product document submitted through the `index_product` tool. Extra metadata
/// keys are spread into the document next to the named fields.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_name: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub category: String,
    pub rating: f64,
    pub in_stock: bool,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl NewProduct {
    pub fn into_document(self) -> serde_json::Value {
        let mut doc = serde_json::Map::new();
        doc.insert(
            fields::PRODUCT_NAME.to_string(),
            serde_json::Value::String(self.product_name),
        );
        doc.insert(
            fields::DESCRIPTION.to_string(),
            serde_json::Value::String(self.description),
        );
        doc.insert(fields::PRICE.to_string(), serde_json::json!(self.price));
        doc.insert(
            fields::BRAND.to_string(),
            serde_json::Value::String(self.brand),
        );
        doc.insert(
            fields::CATEGORY.to_string(),
            serde_json::Value::String(self.category),
        );
        doc.insert(fields::RATING.to_string(), serde_json::json!(self.rating));
        doc.insert(
            fields::IN_STOCK.to_string(),
            serde_json::Value::Bool(self.in_stock),
        );
        // Metadata spreads last and may override the named fields, matching the
        // behavior of building the document as a merged map
        for (key, value) in self.metadata {
            doc.insert(key, value);
        }
        serde_json::Value::Object(doc)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Parameters of the `search_products_by_category` tool
#[derive(Debug, Clone)]
pub struct CategorySearchParams {
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: f64,
    pub in_stock_only: bool,
}

impl Default for CategorySearchParams {
    fn default() -> Self {
        Self {
            category: String::new(),
            min_price: 0.0,
            max_price: 1000.0,
            min_rating: 0.0,
            in_stock_only: false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
