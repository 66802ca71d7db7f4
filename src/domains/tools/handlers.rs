//! Tool handler abstractions.
//!
//! Each tool is a type implementing [`ToolDefinition`]: a name, a
//! description, a typed parameter struct and an async `execute`. The
//! object-safe [`ToolHandler`] is implemented for every definition, so the
//! registry can hold one boxed handler per tool and dispatch by name.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::{ToolError, ToolResult};

/// A tool with a typed parameter struct.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameters, deserialized from the call arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool and produce its text payload.
    async fn execute(&self, params: Self::Params) -> ToolResult<String>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool
    where
        Self: Sized,
    {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Object-safe view of a tool, used by the registry.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Descriptor published in `tools/list`.
    fn descriptor(&self) -> Tool;

    /// Validate the raw arguments and execute the tool.
    async fn call(&self, arguments: JsonObject) -> ToolResult<String>;
}

#[async_trait]
impl<T: ToolDefinition> ToolHandler for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn descriptor(&self) -> Tool {
        T::to_tool()
    }

    async fn call(&self, arguments: JsonObject) -> ToolResult<String> {
        let params: T::Params = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        self.execute(params).await
    }
}

/// Create a success result with text content.
pub fn success_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result carrying `"Error: <message>"`.
pub fn error_result(err: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", err))])
}

/// Return the trimmed value, or a missing-parameter error naming `field`.
pub fn require<'a>(value: &'a str, field: &str) -> ToolResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ToolError::missing(field))
    } else {
        Ok(trimmed)
    }
}

/// Treat blank optional strings as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
