//! Tools domain module.
//!
//! Tools are the executable operations MCP clients call. Each server kind
//! exposes its own ordered tool table.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped per server
//! - `handlers.rs` - `ToolDefinition` / `ToolHandler` traits and result helpers
//! - `router.rs` - Per-server tool tables and the shared HTTP client
//! - `registry.rs` - Tool listing and name-based dispatch
//! - `format.rs` - Text rendering of HTTP responses
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Define the params struct and implement `ToolDefinition`
//! 3. Export it in `definitions/mod.rs`
//! 4. Add it to the server's table in `router.rs`

pub mod definitions;
mod error;
pub mod format;
mod handlers;
mod registry;
pub mod router;

pub use error::{ToolError, ToolResult};
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_handlers;
