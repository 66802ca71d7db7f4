//! Tool Registry - the ordered tool table of one server and its dispatcher.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{error, info, warn};

use super::error::ToolError;
use super::handlers::{ToolHandler, error_result, success_result};
use super::router::build_handlers;
use crate::core::config::{Config, ServerKind};

/// Tool registry - descriptors and handlers for one server kind.
///
/// Built once at start-up and never mutated afterwards.
pub struct ToolRegistry {
    kind: ServerKind,
    handlers: Vec<Box<dyn ToolHandler>>,
    descriptors: Vec<Tool>,
}

impl ToolRegistry {
    /// Build the registry for the server kind named in `config`.
    pub fn for_server(config: &Config) -> crate::core::Result<Self> {
        let handlers = build_handlers(config)?;
        Ok(Self::from_handlers(config.server.kind, handlers))
    }

    /// Build a registry from an explicit handler list (order is kept).
    pub fn from_handlers(kind: ServerKind, handlers: Vec<Box<dyn ToolHandler>>) -> Self {
        let descriptors = handlers.iter().map(|h| h.descriptor()).collect();
        Self {
            kind,
            handlers,
            descriptors,
        }
    }

    /// The server kind this registry serves.
    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn tools(&self) -> &[Tool] {
        &self.descriptors
    }

    /// Dispatch a tool call to the matching handler.
    ///
    /// Always yields exactly one result: unknown names, invalid arguments
    /// and handler failures are logged and rendered as `"Error: ..."` text.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let Some(handler) = self.handlers.iter().find(|h| h.name() == name) else {
            warn!("Unknown tool requested: {}", name);
            return error_result(&ToolError::not_found(name));
        };

        info!("Calling tool {}", name);
        match handler.call(arguments.unwrap_or_default()).await {
            Ok(text) => success_result(text),
            Err(e) => {
                error!("Error in tool {}: {}", name, e);
                error_result(&e)
            }
        }
    }
}
