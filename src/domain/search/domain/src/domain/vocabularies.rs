// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// How many distinct values are sampled per keyword field
pub const VOCABULARY_SAMPLE_SIZE: usize = 50;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The finite sets of categorical values observed in the index. Embedded into
/// the planning prompt as the ONLY values the planner may use in filters; empty
/// sets mean no categorical filtering is permitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterVocabularies {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub common_tags: Vec<String>,
}

impl FilterVocabularies {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.brands.is_empty() && self.common_tags.is_empty()
    }
}
