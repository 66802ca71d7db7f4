//! MCP server handler and lifecycle.
//!
//! `McpServer` owns the tool registry for one server kind. The registry (and
//! with it the shared HTTP client) is built once in [`McpServer::new`] and
//! dropped when the last clone of the server goes away.
//!
//! Tool calls are answered by the registry's dispatcher, which always
//! produces a text result. Unknown tools and handler failures come back as
//! `"Error: ..."` text rather than protocol errors.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::Result;
use super::config::{Config, ServerKind};
use crate::domains::tools::ToolRegistry;

/// The MCP server handler for one tool table.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool descriptors and handlers for this server kind.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the outbound HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::for_server(&config)?;

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Which tool table this server exposes.
    pub fn kind(&self) -> ServerKind {
        self.config.server.kind
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.registry.tools().len()
    }

    /// Ordered tool descriptors, identical on every call.
    pub fn tool_descriptors(&self) -> Vec<Tool> {
        self.registry.tools().to_vec()
    }

    /// Dispatch a tool call by name. Never fails; errors are text results.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.registry.dispatch(name, arguments).await
    }

    fn instructions(&self) -> &'static str {
        match self.kind() {
            ServerKind::Database => {
                "SQL tools for a local SQLite database (and MySQL when enabled). \
                 Run init_sample_data first to create customers, products and orders."
            }
            ServerKind::MedicalApi => {
                "Lookups against public medical and health-data APIs (ICD-11, openFDA, \
                 Infermedica, Nutritionix, NPI registry, CMS marketplace, disease.sh, \
                 NHS Scotland). Some tools need caller-supplied API keys."
            }
            ServerKind::WebApi => {
                "Generic HTTP tools: GET, POST, PUT, DELETE, JSON fetch and status checks."
            }
            ServerKind::Terminal => {
                "Runs shell commands inside the configured workspace directory."
            }
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        debug!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_descriptors(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.dispatch(&request.name, request.arguments).await)
    }
}
