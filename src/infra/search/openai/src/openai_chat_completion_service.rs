// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopsearch_search::{ChatCompletionError, ChatCompletionService};

use crate::OpenAiChatConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Chat completions via the OpenAI REST API (`POST {url}/chat/completions`)
pub struct OpenAiChatCompletionService {
    config: Arc<OpenAiChatConfig>,
    http: reqwest::Client,
}

#[dill::component(pub)]
#[dill::scope(dill::Singleton)]
#[dill::interface(dyn ChatCompletionService)]
impl OpenAiChatCompletionService {
    pub fn new(config: Arc<OpenAiChatConfig>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.url.as_str().trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for OpenAiChatCompletionService {
    #[tracing::instrument(level = "debug", skip_all, fields(model = %self.config.model_name))]
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ChatCompletionError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ChatCompletionError::MissingApiKey);
        };

        let request = ChatCompletionRequest {
            model: &self.config.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature,
        };

        let response: ChatCompletionResponse = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(ChatCompletionError::request)?
            .error_for_status()
            .map_err(ChatCompletionError::request)?
            .json()
            .await
            .map_err(ChatCompletionError::request)?;

        let reply = response
            .choices
            .into_iter()
            .next()
            .ok_or(ChatCompletionError::EmptyReply)?
            .message
            .content;

        Ok(reply)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoiceMessage {
    content: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
