//! Process entry point shared by all server binaries.

use tracing::{info, warn};

use super::config::{Config, ServerKind};
use super::logging::init_logging;
use super::server::McpServer;
use super::transport::TransportService;
use super::Result;

/// Load configuration, initialize logging and serve `kind` until the
/// transport shuts down.
pub async fn launch(kind: ServerKind) -> Result<()> {
    let (config, warnings) = Config::from_env(kind);

    init_logging(&config.logging);
    for warning in &warnings {
        warn!("{}", warning);
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    if kind.uses_http() {
        match config.http.timeout_secs {
            Some(secs) => info!("Outbound HTTP as {} (timeout {}s)", config.http.user_agent, secs),
            None => info!("Outbound HTTP as {} (no timeout)", config.http.user_agent),
        }
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized with {} tools", server.tool_count());

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
