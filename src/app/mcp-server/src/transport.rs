// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::ToolRegistry;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Line-delimited JSON over stdio. One request per line, one reply per line,
/// `ready` announced before the loop starts. Malformed lines are logged and
/// skipped so a single bad client message cannot wedge the session, and all
/// logging goes to stderr to keep stdout pure JSON.
pub struct StdioTransport {
    registry: ToolRegistry,
}

impl StdioTransport {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub async fn run_stdio(&self) -> std::io::Result<()> {
        self.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    pub async fn run(
        &self,
        mut input: impl AsyncBufRead + Unpin,
        mut output: impl AsyncWrite + Unpin,
    ) -> std::io::Result<()> {
        Self::write_message(
            &mut output,
            &json!({"type": "ready", "message": "MCP server is ready"}),
        )
        .await?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line).await? == 0 {
                tracing::info!("Input closed, shutting down");
                return Ok(());
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let message: InboundMessage = match serde_json::from_str(line) {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to parse message, skipping");
                    continue;
                }
            };

            let reply = self.handle(message).await;
            Self::write_message(&mut output, &reply).await?;
        }
    }

    async fn handle(&self, message: InboundMessage) -> Value {
        let id = message.id.unwrap_or_else(|| json!("unknown"));

        match message.msg_type.as_deref() {
            Some("list_tools") => json!({
                "id": id,
                "type": "list_tools_response",
                "tools": self.registry.definitions(),
            }),

            Some("tool_call") => {
                let Some(tool) = message.tool.as_deref() else {
                    return json!({
                        "id": id,
                        "type": "error",
                        "error": "Tool not found: unknown",
                    });
                };

                let args = message.args.unwrap_or_default();
                match self.registry.call(tool, &args).await {
                    Ok(result) => json!({
                        "id": id,
                        "type": "tool_call_response",
                        "result": result,
                    }),
                    Err(error) => json!({
                        "id": id,
                        "type": "error",
                        "error": error,
                    }),
                }
            }

            other => {
                tracing::warn!(msg_type = ?other, "Unknown message type");
                json!({
                    "id": id,
                    "type": "error",
                    "error": format!("Unknown message type: {}", other.unwrap_or("unknown")),
                })
            }
        }
    }

    async fn write_message(
        output: &mut (impl AsyncWrite + Unpin),
        message: &Value,
    ) -> std::io::Result<()> {
        let mut buf = serde_json::to_string(message)?.into_bytes();
        buf.push(b'\n');
        output.write_all(&buf).await?;
        output.flush().await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
struct InboundMessage {
    #[serde(default)]
    id: Option<Value>,

    #[serde(default, rename = "type")]
    msg_type: Option<String>,

    #[serde(default)]
    tool: Option<String>,

    #[serde(default)]
    args: Option<serde_json::Map<String, Value>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
