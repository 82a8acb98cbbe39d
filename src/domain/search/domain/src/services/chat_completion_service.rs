// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::ChatCompletionError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Chat-completion-style LLM: one text prompt in, one text reply out
#[async_trait::async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f32)
    -> Result<String, ChatCompletionError>;
}
