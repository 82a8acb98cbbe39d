// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use shopsearch_mcp_server::{ServerConfig, StdioTransport, ToolRegistry, configure_catalog};
use shopsearch_search::ProductSearchService;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_LOGGING_CONFIG: &str = "info";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> std::process::ExitCode {
    configure_logging();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid ELASTICSEARCH_HOST value");
            return std::process::ExitCode::FAILURE;
        }
    };

    tracing::info!(
        es_url = %config.es.url,
        default_index = %config.default_index,
        model = %config.openai.model_name,
        llm_configured = config.openai.api_key.is_some(),
        "Starting MCP server",
    );

    let catalog = configure_catalog(&config);
    let search_svc = catalog
        .get_one::<dyn ProductSearchService>()
        .expect("Catalog is not fully wired");

    let transport = StdioTransport::new(ToolRegistry::new(search_svc, config.default_index));

    match transport.run_stdio().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Transport failed");
            std::process::ExitCode::FAILURE
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Stdout carries the JSON protocol, so logs can only go to stderr
fn configure_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGGING_CONFIG));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
