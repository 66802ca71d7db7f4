//! Rendering of HTTP responses as tool text.
//!
//! Shared by the medical API and web API tools.

use reqwest::Response;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::error::{ToolError, ToolResult};

/// Maximum number of characters of a non-JSON body kept in the output.
pub const MAX_BODY_CHARS: usize = 2000;

/// Appended after a body cut at [`MAX_BODY_CHARS`].
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Pretty-print a JSON value with two-space indentation.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Keep the first [`MAX_BODY_CHARS`] characters of `text`, marking the cut.
pub fn truncate_body(text: &str) -> String {
    match text.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Render a completed response as status, content type, length and body.
///
/// JSON content types are re-indented (raw text if the body does not parse);
/// anything else is truncated to [`MAX_BODY_CHARS`].
pub fn format_response(status: u16, content_type: &str, body: &str) -> String {
    let mut result = format!(
        "Status: {}\nContent-Type: {}\nResponse Length: {} characters\n\n",
        status,
        content_type,
        body.chars().count()
    );

    if content_type.contains("application/json") {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => result.push_str(&pretty_json(&value)),
            Err(_) => result.push_str(body),
        }
    } else {
        result.push_str(&truncate_body(body));
    }

    result
}

/// Read a response and render it with [`format_response`].
pub async fn render_response(response: Response) -> ToolResult<String> {
    let status = response.status().as_u16();
    let content_type = header_text(&response, CONTENT_TYPE.as_str()).unwrap_or_default();
    let body = response.text().await?;
    Ok(format_response(status, &content_type, &body))
}

/// Pretty JSON for a 2xx response, `HTTP <status> - <body>` otherwise.
pub async fn json_body(response: Response) -> ToolResult<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ToolError::http_status(status.as_u16(), body));
    }

    let value: Value =
        serde_json::from_str(&body).map_err(|e| ToolError::malformed(e.to_string()))?;
    Ok(pretty_json(&value))
}

/// A response header as text, if present and valid.
pub fn header_text(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
