// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search_elasticsearch::EsSearchConfig;
use shopsearch_search_openai::OpenAiChatConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Server configuration assembled from environment variables:
/// `ELASTICSEARCH_HOST`, `ELASTICSEARCH_USER`, `ELASTICSEARCH_PASSWORD`,
/// `ELASTICSEARCH_INDEX`, `OPENAI_API_KEY`, `OPENAI_MODEL`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub es: EsSearchConfig,
    pub openai: OpenAiChatConfig,

    /// Index used when a tool call does not name one
    pub default_index: String,
}

impl ServerConfig {
    pub const DEFAULT_INDEX: &'static str = "ecommerce";

    pub fn from_env() -> Result<Self, url::ParseError> {
        let es_url = match env_var("ELASTICSEARCH_HOST") {
            Some(host) => url::Url::parse(&host)?,
            None => url::Url::parse(EsSearchConfig::DEFAULT_URL).unwrap(),
        };

        let es = EsSearchConfig {
            url: es_url,
            user: env_var("ELASTICSEARCH_USER"),
            password: env_var("ELASTICSEARCH_PASSWORD"),
            timeout_secs: EsSearchConfig::DEFAULT_TIMEOUT_SECS,
        };

        let openai = OpenAiChatConfig {
            api_key: env_var("OPENAI_API_KEY"),
            model_name: env_var("OPENAI_MODEL")
                .unwrap_or_else(|| OpenAiChatConfig::DEFAULT_MODEL_NAME.to_string()),
            ..Default::default()
        };

        Ok(Self {
            es,
            openai,
            default_index: env_var("ELASTICSEARCH_INDEX")
                .unwrap_or_else(|| Self::DEFAULT_INDEX.to_string()),
        })
    }
}

// Unset and empty are treated the same
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
