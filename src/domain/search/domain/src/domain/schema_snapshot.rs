// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Coarse per-field type tag derived from the live index mapping. Only the
/// distinctions that matter to the planner are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaFieldKind {
    Text,
    Keyword,
    Numeric,
    Boolean,
}

impl SchemaFieldKind {
    /// Collapses an engine mapping type name into a coarse kind. Anything exotic
    /// is treated as analyzed text.
    pub fn from_engine_type(engine_type: &str) -> Self {
        match engine_type {
            "keyword" => SchemaFieldKind::Keyword,
            "boolean" => SchemaFieldKind::Boolean,
            "float" | "double" | "integer" | "long" | "short" | "byte" | "half_float"
            | "scaled_float" => SchemaFieldKind::Numeric,
            _ => SchemaFieldKind::Text,
        }
    }

    fn as_engine_type(self) -> &'static str {
        match self {
            SchemaFieldKind::Text => "text",
            SchemaFieldKind::Keyword => "keyword",
            SchemaFieldKind::Numeric => "float",
            SchemaFieldKind::Boolean => "boolean",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Field-name → type-tag dictionary embedded into the planning prompt. One
/// snapshot is taken per `search` call and never cached across calls.
#[derive(Debug, Clone)]
pub struct SchemaSnapshot {
    pub fields: BTreeMap<String, SchemaFieldKind>,
}

impl SchemaSnapshot {
    /// Extracts a snapshot from raw engine mappings (`{"properties": {...}}`).
    /// Fields without a recognizable `type` are skipped.
    pub fn from_engine_mappings(mappings: &serde_json::Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(properties) = mappings.get("properties").and_then(|p| p.as_object()) {
            for (name, mapping) in properties {
                if let Some(engine_type) = mapping.get("type").and_then(|t| t.as_str()) {
                    fields.insert(name.clone(), SchemaFieldKind::from_engine_type(engine_type));
                }
            }
        }
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the snapshot in the engine's own mapping shape, which is what the
    /// planning prompt embeds
    pub fn to_prompt_json(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for (name, kind) in &self.fields {
            properties.insert(
                name.clone(),
                serde_json::json!({ "type": kind.as_engine_type() }),
            );
        }
        serde_json::json!({ "properties": properties })
    }
}

impl Default for SchemaSnapshot {
    /// The fixed product schema assumed when introspection fails or the index
    /// does not exist yet
    fn default() -> Self {
        let fields = [
            (fields::PRODUCT_NAME, SchemaFieldKind::Text),
            (fields::DESCRIPTION, SchemaFieldKind::Text),
            (fields::PRICE, SchemaFieldKind::Numeric),
            (fields::BRAND, SchemaFieldKind::Keyword),
            (fields::CATEGORY, SchemaFieldKind::Keyword),
            (fields::RATING, SchemaFieldKind::Numeric),
            (fields::IN_STOCK, SchemaFieldKind::Boolean),
            (fields::TAGS, SchemaFieldKind::Keyword),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect();

        Self { fields }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_snapshot_from_engine_mappings() {
        let mappings = serde_json::json!({
            "properties": {
                "product_name": { "type": "text" },
                "brand": { "type": "keyword" },
                "price": { "type": "float" },
                "in_stock": { "type": "boolean" },
                "nested_thing": { "properties": {} },
            }
        });

        let snapshot = SchemaSnapshot::from_engine_mappings(&mappings);

        assert_eq!(
            snapshot.fields.get("product_name"),
            Some(&SchemaFieldKind::Text)
        );
        assert_eq!(snapshot.fields.get("brand"), Some(&SchemaFieldKind::Keyword));
        assert_eq!(snapshot.fields.get("price"), Some(&SchemaFieldKind::Numeric));
        assert_eq!(
            snapshot.fields.get("in_stock"),
            Some(&SchemaFieldKind::Boolean)
        );
        assert!(!snapshot.fields.contains_key("nested_thing"));
    }

    #[test]
    fn test_default_snapshot_round_trips_through_prompt_json() {
        let snapshot = SchemaSnapshot::default();
        let json = snapshot.to_prompt_json();

        assert_eq!(json["properties"]["product_name"]["type"], "text");
        assert_eq!(json["properties"]["category"]["type"], "keyword");
        assert_eq!(json["properties"]["rating"]["type"], "float");
        assert_eq!(json["properties"]["in_stock"]["type"], "boolean");
        assert_eq!(json["properties"]["tags"]["type"], "keyword");
    }
}
