// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct OpenAiChatConfig {
    pub url: url::Url,

    /// `None` disables the planner: completions fail fast and callers fall
    /// back to default behavior
    pub api_key: Option<String>,

    pub model_name: String,
}

impl OpenAiChatConfig {
    pub const DEFAULT_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL_NAME: &'static str = "gpt-4o-mini";
}

impl Default for OpenAiChatConfig {
    fn default() -> Self {
        Self {
            url: url::Url::parse(Self::DEFAULT_URL).unwrap(),
            api_key: None,
            model_name: Self::DEFAULT_MODEL_NAME.to_string(),
        }
    }
}
