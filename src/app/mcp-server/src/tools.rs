// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde_json::{Map, Value};
use shopsearch_search::{CategorySearchParams, NewProduct, ProductSearchService};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// Listed in registration order, which clients may rely on
pub const TOOL_DEFS: [ToolDef; 6] = [
    ToolDef {
        name: "index_product",
        description: "Index a product in Elasticsearch.",
    },
    ToolDef {
        name: "search",
        description: "Search for products matching a query with LLM-powered query planning.",
    },
    ToolDef {
        name: "create_test_index",
        description: "Create a test index with sample documents for demonstration purposes.",
    },
    ToolDef {
        name: "create_ecommerce_test_index",
        description: "Create a test e-commerce index with sample products for demonstration purposes.",
    },
    ToolDef {
        name: "search_products_by_category",
        description: "Search for products in a specific category with optional price and rating filters.",
    },
    ToolDef {
        name: "search_products_by_brand",
        description: "Search for products from a specific brand.",
    },
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Maps tool calls onto the search facade, applying per-tool argument
/// defaults. Argument errors come back as `Err(message)` and become transport
/// error replies; the tools themselves never fail.
pub struct ToolRegistry {
    search_svc: Arc<dyn ProductSearchService>,
    default_index: String,
}

impl ToolRegistry {
    pub fn new(search_svc: Arc<dyn ProductSearchService>, default_index: String) -> Self {
        Self {
            search_svc,
            default_index,
        }
    }

    pub fn definitions(&self) -> &'static [ToolDef] {
        &TOOL_DEFS
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%tool))]
    pub async fn call(&self, tool: &str, args: &Map<String, Value>) -> Result<String, String> {
        match tool {
            "search" => {
                let query = require_str(args, "query")?;
                let index = opt_str(args, "index", &self.default_index)?;
                Ok(self.search_svc.search(query, &index).await)
            }

            "search_products_by_category" => {
                let params = CategorySearchParams {
                    category: require_str(args, "category")?.to_string(),
                    min_price: opt_f64(args, "min_price", 0.0)?,
                    max_price: opt_f64(args, "max_price", 1000.0)?,
                    min_rating: opt_f64(args, "min_rating", 0.0)?,
                    in_stock_only: opt_bool(args, "in_stock_only", false)?,
                };
                let index = opt_str(args, "index", &self.default_index)?;
                Ok(self
                    .search_svc
                    .search_products_by_category(params, &index)
                    .await)
            }

            "search_products_by_brand" => {
                let brand = require_str(args, "brand")?;
                let index = opt_str(args, "index", &self.default_index)?;
                Ok(self.search_svc.search_products_by_brand(brand, &index).await)
            }

            "index_product" => {
                let product = NewProduct {
                    product_name: require_str(args, "product_name")?.to_string(),
                    description: require_str(args, "description")?.to_string(),
                    price: require_f64(args, "price")?,
                    brand: opt_str(args, "brand", "")?,
                    category: opt_str(args, "category", "")?,
                    rating: opt_f64(args, "rating", 0.0)?,
                    in_stock: opt_bool(args, "in_stock", true)?,
                    metadata: opt_map(args, "metadata")?,
                };
                let index = opt_str(args, "index", &self.default_index)?;
                Ok(self.search_svc.index_product(product, &index).await)
            }

            "create_test_index" => {
                let num_documents = opt_usize(args, "num_documents", 10)?;
                let index = opt_str(args, "index", "test_documents")?;
                Ok(self.search_svc.create_test_index(num_documents, &index).await)
            }

            "create_ecommerce_test_index" => {
                let num_products = opt_usize(args, "num_products", 20)?;
                let index = opt_str(args, "index", "ecommerce")?;
                Ok(self
                    .search_svc
                    .create_ecommerce_test_index(num_products, &index)
                    .await)
            }

            _ => Err(format!("Tool not found: {tool}")),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn require_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, String> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(format!("Invalid value for argument: {name}")),
        None => Err(format!("Missing required argument: {name}")),
    }
}

fn opt_str(args: &Map<String, Value>, name: &str, default: &str) -> Result<String, String> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(format!("Invalid value for argument: {name}")),
        None => Ok(default.to_string()),
    }
}

fn require_f64(args: &Map<String, Value>, name: &str) -> Result<f64, String> {
    match args.get(name) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("Invalid value for argument: {name}")),
        None => Err(format!("Missing required argument: {name}")),
    }
}

fn opt_f64(args: &Map<String, Value>, name: &str, default: f64) -> Result<f64, String> {
    match args.get(name) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("Invalid value for argument: {name}")),
        None => Ok(default),
    }
}

fn opt_bool(args: &Map<String, Value>, name: &str, default: bool) -> Result<bool, String> {
    match args.get(name) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(format!("Invalid value for argument: {name}")),
        None => Ok(default),
    }
}

fn opt_usize(args: &Map<String, Value>, name: &str, default: usize) -> Result<usize, String> {
    match args.get(name) {
        Some(value) => value
            .as_u64()
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .ok_or_else(|| format!("Invalid value for argument: {name}")),
        None => Ok(default),
    }
}

fn opt_map(args: &Map<String, Value>, name: &str) -> Result<Map<String, Value>, String> {
    match args.get(name) {
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(Value::Null) | None => Ok(Map::new()),
        Some(_) => Err(format!("Invalid value for argument: {name}")),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
