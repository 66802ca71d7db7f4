//! MCP toolbox library
//!
//! Four Model Context Protocol servers sharing one runtime: a SQL database
//! server (SQLite, optional MySQL), a medical/public-health API server, a
//! generic HTTP client server and a workspace terminal server. Each binary
//! in `src/bin` picks a [`ServerKind`] and calls [`core::launch`].
//!
//! # Architecture
//!
//! - **core**: configuration, logging, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool tables of every server kind
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_toolbox::{Config, McpServer, ServerKind};
//!
//! # fn main() -> mcp_toolbox::Result<()> {
//! let config = Config::for_server(ServerKind::WebApi);
//! let server = McpServer::new(config)?;
//! assert_eq!(server.tool_count(), 6);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, ServerKind};
