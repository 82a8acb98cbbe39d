// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![allow(dead_code)]

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
pub struct EsSearchResponse {
    pub took: u64,
    pub timed_out: bool,
    pub hits: EsHitsResponse,

    /// Present only for aggregation requests (vocabulary sampling)
    pub aggregations: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
pub struct EsHitsResponse {
    pub total: Option<EsHitsTotalResponse>,
    pub hits: Vec<EsHitResponse>,
}

#[derive(Debug, serde::Deserialize)]
pub struct EsHitsTotalResponse {
    pub value: u64,
    pub relation: EsHitsTotalRelation,
}

#[derive(Debug, serde::Deserialize)]
pub enum EsHitsTotalRelation {
    #[serde(rename = "eq")]
    Eq,
    #[serde(rename = "gte")]
    Gte,
}

#[derive(Debug, serde::Deserialize)]
pub struct EsHitResponse {
    #[serde(rename = "_index")]
    pub index: String,

    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_score")]
    pub score: Option<f64>,

    #[serde(rename = "_source")]
    pub source: Option<serde_json::Value>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
