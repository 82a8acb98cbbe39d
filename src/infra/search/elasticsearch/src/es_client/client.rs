// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_search::{ResultIntoEngine, SearchEngineError};

use crate::EsSearchConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Thin JSON client over the Elasticsearch REST API. Only the endpoints the
/// repository consumes are exposed.
pub struct EsClient {
    http: reqwest::Client,
    config: EsSearchConfig,
}

impl EsClient {
    pub fn init(config: EsSearchConfig) -> Result<Self, SearchEngineError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .engine_err()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url.as_str().trim_end_matches('/'),
            path
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.endpoint(path));
        if let Some((user, password)) = self.config.basic_auth() {
            req = req.basic_auth(user, Some(password));
        }
        req
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError> {
        let response = self
            .request(reqwest::Method::HEAD, index)
            .send()
            .await
            .engine_err()?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(true),
            reqwest::StatusCode::NOT_FOUND => Ok(false),
            status => Err(SearchEngineError::bail(format!(
                "unexpected status {status} checking index '{index}'"
            ))),
        }
    }

    /// `GET /{index}` — returns the full index info object keyed by index name
    pub async fn get_index(&self, index: &str) -> Result<serde_json::Value, SearchEngineError> {
        self.request(reqwest::Method::GET, index)
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?
            .json()
            .await
            .engine_err()
    }

    pub async fn create_index(
        &self,
        index: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(), SearchEngineError> {
        let mut req = self.request(reqwest::Method::PUT, index);
        if let Some(body) = body {
            req = req.json(body);
        }
        req.send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?;
        Ok(())
    }

    pub async fn delete_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.request(reqwest::Method::DELETE, index)
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?;
        Ok(())
    }

    pub async fn refresh_index(&self, index: &str) -> Result<(), SearchEngineError> {
        self.request(reqwest::Method::POST, &format!("{index}/_refresh"))
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?;
        Ok(())
    }

    pub async fn index_document(
        &self,
        index: &str,
        document: &serde_json::Value,
    ) -> Result<super::EsIndexDocumentResponse, SearchEngineError> {
        self.request(reqwest::Method::POST, &format!("{index}/_doc"))
            .json(document)
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?
            .json()
            .await
            .engine_err()
    }

    pub async fn bulk_index(
        &self,
        index: &str,
        documents: &[serde_json::Value],
    ) -> Result<(), SearchEngineError> {
        let mut body = String::new();
        for document in documents {
            body.push_str("{\"index\":{}}\n");
            body.push_str(&serde_json::to_string(document).engine_err()?);
            body.push('\n');
        }

        let response: super::EsBulkResponse = self
            .request(reqwest::Method::POST, &format!("{index}/_bulk"))
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?
            .json()
            .await
            .engine_err()?;

        if response.errors {
            return Err(SearchEngineError::bail(format!(
                "bulk indexing into '{index}' reported item-level errors"
            )));
        }
        Ok(())
    }

    pub async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<super::EsSearchResponse, SearchEngineError> {
        self.request(reqwest::Method::POST, &format!("{index}/_search"))
            .json(body)
            .send()
            .await
            .engine_err()?
            .error_for_status()
            .engine_err()?
            .json()
            .await
            .engine_err()
    }
}
