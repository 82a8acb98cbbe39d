// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search::{CategorySearchParams, ProductHit, QueryPlan};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Renders tool replies. The layouts are part of the tool contract: demo
/// scripts scan for the `Query plan:` / `Results:` / `Product <i>:` anchors,
/// so the anchors and field order must stay stable.
pub struct ResultFormatter {}

impl ResultFormatter {
    pub fn search_results(query: &str, plan: &QueryPlan, hits: &[ProductHit]) -> String {
        let plan_json = Self::plan_json(plan);

        if hits.is_empty() {
            return format!("No products found for query: {query}\n\nQuery plan: {plan_json}");
        }

        let formatted_results = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                format!(
                    "Product {}:\n\
                     Name: {}\n\
                     Brand: {}\n\
                     Price: ${}\n\
                     Rating: {}/5\n\
                     In Stock: {}\n\
                     Category: {}\n\
                     Description: {}",
                    i + 1,
                    hit.product_name().unwrap_or("Unnamed product"),
                    hit.brand().unwrap_or("N/A"),
                    Self::number(hit.source.get("price")),
                    Self::number(hit.source.get("rating")),
                    Self::yes_no(hit.in_stock()),
                    hit.category().unwrap_or("N/A"),
                    Self::description_preview(hit.description()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Search results for: {query}\n\nQuery plan:\n{plan_json}\n\nResults:\n{formatted_results}\n"
        )
    }

    pub fn category_results(params: &CategorySearchParams, hits: &[ProductHit]) -> String {
        if hits.is_empty() {
            return format!(
                "No products found in category '{}' matching your criteria.",
                params.category
            );
        }

        let formatted_results = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                format!(
                    "Product {}:\n\
                     Name: {}\n\
                     Brand: {}\n\
                     Price: ${}\n\
                     Rating: {}/5\n\
                     In Stock: {}\n\
                     Description: {}",
                    i + 1,
                    hit.product_name().unwrap_or("Unnamed product"),
                    hit.brand().unwrap_or("N/A"),
                    Self::number(hit.source.get("price")),
                    Self::number(hit.source.get("rating")),
                    Self::yes_no(hit.in_stock()),
                    Self::description_preview(hit.description()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Products in category '{}':\n\
             Price range: ${} - ${}\n\
             Minimum rating: {}/5\n\
             In stock only: {}\n\
             \n\
             Results:\n\
             {}\n",
            params.category,
            params.min_price,
            params.max_price,
            params.min_rating,
            Self::yes_no(params.in_stock_only),
            formatted_results,
        )
    }

    pub fn brand_results(brand: &str, hits: &[ProductHit]) -> String {
        if hits.is_empty() {
            return format!("No products found from brand '{brand}'.");
        }

        let formatted_results = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                format!(
                    "Product {}:\n\
                     Name: {}\n\
                     Price: ${}\n\
                     Category: {}\n\
                     Rating: {}/5\n\
                     In Stock: {}\n\
                     Description: {}",
                    i + 1,
                    hit.product_name().unwrap_or("Unnamed product"),
                    Self::number(hit.source.get("price")),
                    hit.category().unwrap_or("N/A"),
                    Self::number(hit.source.get("rating")),
                    Self::yes_no(hit.in_stock()),
                    Self::description_preview(hit.description()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("Products from brand '{brand}':\n\nResults:\n{formatted_results}\n")
    }

    pub fn plan_json(plan: &QueryPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }

    // The ellipsis is unconditional, even for short descriptions
    fn description_preview(description: Option<&str>) -> String {
        let text = description.unwrap_or("No description");
        let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{preview}...")
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "Yes" } else { "No" }
    }

    // Whole floats keep one decimal place ("3.0"), integers print bare
    fn number(value: Option<&serde_json::Value>) -> String {
        match value {
            Some(serde_json::Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(f) = n.as_f64() {
                    if f.fract() == 0.0 {
                        format!("{f:.1}")
                    } else {
                        f.to_string()
                    }
                } else {
                    n.to_string()
                }
            }
            Some(other) => other.to_string(),
            None => "N/A".to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
