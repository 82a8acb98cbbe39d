// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{FilterVocabularies, SchemaSnapshot};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Samples the live index so plans can be grounded in what actually exists.
/// Both operations are total: on any engine failure they log and return the
/// default snapshot / empty vocabularies.
#[async_trait::async_trait]
pub trait IndexIntrospector: Send + Sync {
    async fn get_schema(&self, index: &str) -> SchemaSnapshot;

    async fn get_vocabularies(&self, index: &str) -> FilterVocabularies;
}
