//! Helpers shared across the medical API tools.

use reqwest::{RequestBuilder, Url};

use crate::domains::tools::format::json_body;
use crate::domains::tools::{ToolError, ToolResult};

/// Default number of openFDA results.
pub fn default_limit() -> u32 {
    5
}

/// Clamp a result limit to the range openFDA accepts (1-100).
pub fn validate_limit(limit: u32) -> u32 {
    limit.clamp(1, 100)
}

/// Append path `segments` to `base`, percent-encoding each one.
///
/// An empty trailing segment yields a trailing slash.
pub fn endpoint(base: &str, segments: &[&str]) -> ToolResult<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| ToolError::execution_failed(format!("invalid base URL '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| {
            ToolError::execution_failed(format!("base URL '{}' cannot hold a path", base))
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send `request` and return its JSON body re-indented.
pub async fn send_json(request: RequestBuilder) -> ToolResult<String> {
    let response = request.send().await?;
    json_body(response).await
}
