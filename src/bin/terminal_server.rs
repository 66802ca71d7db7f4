//! Workspace terminal server.
//!
//! Serves MCP over the transport selected by `MCP_TRANSPORT` (stdio by default).

use anyhow::Result;
use mcp_toolbox::{ServerKind, core::launch};

#[tokio::main]
async fn main() -> Result<()> {
    launch(ServerKind::Terminal).await?;
    Ok(())
}
