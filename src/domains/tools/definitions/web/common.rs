//! Header, query and body helpers shared by the HTTP tools.
//!
//! Maps arrive as JSON objects whose values may be any scalar; strings are
//! used verbatim and everything else is written as its JSON text.

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domains::tools::{ToolError, ToolResult};

/// A JSON object as received from the client.
pub type JsonMap = BTreeMap<String, Value>;

/// Default for `json_data`.
pub fn default_true() -> bool {
    true
}

/// Text form of a JSON value.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build request headers, rejecting names or values HTTP cannot carry.
pub fn header_map(headers: &JsonMap) -> ToolResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ToolError::invalid_arguments(format!("invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(&scalar_text(value)).map_err(|e| {
            ToolError::invalid_arguments(format!("invalid value for header '{}': {}", name, e))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Key/value pairs for a query string or a form body.
pub fn text_pairs(map: &JsonMap) -> Vec<(&str, String)> {
    map.iter()
        .map(|(k, v)| (k.as_str(), scalar_text(v)))
        .collect()
}

/// Attach `headers` and `data`, the latter as a JSON document or as form
/// fields.
///
/// A JSON body always goes out as `application/json`, whatever content type
/// the caller passed.
pub fn with_body(
    request: RequestBuilder,
    mut headers: HeaderMap,
    data: &JsonMap,
    json_data: bool,
) -> RequestBuilder {
    if json_data {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.headers(headers).json(data)
    } else {
        request.headers(headers).form(&text_pairs(data))
    }
}
