//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, logging, the MCP server handler and the
//! transport layer. Everything tool-specific lives under `domains`.

pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::{Config, ServerKind};
pub use error::{Error, Result};
pub use launch::launch;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
