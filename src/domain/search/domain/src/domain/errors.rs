// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Failure of a full-text engine operation. Carries the underlying transport or
/// engine error; the message is what a tool surfaces to the caller verbatim.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct SearchEngineError {
    #[source]
    source: BoxedError,
}

impl SearchEngineError {
    pub fn new<E: Into<BoxedError>>(e: E) -> Self {
        Self { source: e.into() }
    }

    pub fn bail(reason: impl Into<String>) -> Self {
        Self::new(SearchEngineErrorBail {
            reason: reason.into(),
        })
    }
}

#[derive(Error, Debug)]
#[error("{reason}")]
struct SearchEngineErrorBail {
    reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ErrorIntoEngine {
    fn engine_err(self) -> SearchEngineError;
}

impl<E> ErrorIntoEngine for E
where
    E: Into<BoxedError>,
{
    fn engine_err(self) -> SearchEngineError {
        SearchEngineError::new(self)
    }
}

pub trait ResultIntoEngine<OK> {
    fn engine_err(self) -> Result<OK, SearchEngineError>;
}

impl<OK, E> ResultIntoEngine<OK> for Result<OK, E>
where
    E: Into<BoxedError>,
{
    fn engine_err(self) -> Result<OK, SearchEngineError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(e.engine_err()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Failure of the LLM completion step. The planner recovers from every variant
/// by falling back to the default plan.
#[derive(Error, Debug)]
pub enum ChatCompletionError {
    #[error("LLM API key is not configured")]
    MissingApiKey,

    #[error("LLM request failed: {source}")]
    Request { source: BoxedError },

    #[error("LLM reply is missing a completion")]
    EmptyReply,
}

impl ChatCompletionError {
    pub fn request<E: Into<BoxedError>>(e: E) -> Self {
        Self::Request { source: e.into() }
    }
}
