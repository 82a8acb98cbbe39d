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

/// A single search hit: the stored product document plus the engine's relevance
/// score. The source is kept as raw JSON because documents may carry arbitrary
/// metadata beyond the named product fields.
#[derive(Debug, Clone)]
pub struct ProductHit {
    pub source: serde_json::Value,
    pub score: Option<f64>,
}

impl ProductHit {
    fn str_field(&self, field: &str) -> Option<&str> {
        self.source.get(field).and_then(|v| v.as_str())
    }

    fn num_field(&self, field: &str) -> Option<f64> {
        self.source.get(field).and_then(serde_json::Value::as_f64)
    }

    pub fn product_name(&self) -> Option<&str> {
        self.str_field(fields::PRODUCT_NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field(fields::DESCRIPTION)
    }

    pub fn brand(&self) -> Option<&str> {
        self.str_field(fields::BRAND)
    }

    pub fn category(&self) -> Option<&str> {
        self.str_field(fields::CATEGORY)
    }

    pub fn price(&self) -> Option<f64> {
        self.num_field(fields::PRICE)
    }

    pub fn rating(&self) -> Option<f64> {
        self.num_field(fields::RATING)
    }

    pub fn in_stock(&self) -> bool {
        self.source
            .get(fields::IN_STOCK)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}
