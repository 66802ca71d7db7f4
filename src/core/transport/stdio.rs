//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.
//! Stdout carries protocol frames only; logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();
        info!(
            "{} ready with {} tools on stdin/stdout",
            name,
            server.tool_count()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("{}: client closed stdin", name);
        Ok(())
    }
}
