//! Fetch JSON tool.
//!
//! Stricter than `get_request`: anything but a 200 with a JSON body is an
//! error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::common::{JsonMap, header_map};
use crate::domains::tools::format::pretty_json;
use crate::domains::tools::{ToolDefinition, ToolError, ToolResult, require};

/// Parameters for the fetch JSON tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchJsonParams {
    #[schemars(description = "The URL to fetch JSON from")]
    pub url: String,

    #[serde(default)]
    #[schemars(description = "Optional headers to include in the request")]
    pub headers: JsonMap,
}

/// Fetch JSON tool.
pub struct FetchJsonTool {
    http: Client,
}

impl FetchJsonTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for FetchJsonTool {
    const NAME: &'static str = "fetch_json";

    const DESCRIPTION: &'static str = "Fetch and parse JSON data from a URL";

    type Params = FetchJsonParams;

    async fn execute(&self, params: FetchJsonParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("Fetching JSON from {}", url);

        let response = self
            .http
            .get(url)
            .headers(header_map(&params.headers)?)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ToolError::http_status(status.as_u16(), ""));
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| ToolError::malformed(e.to_string()))?;
        Ok(pretty_json(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn params(url: String) -> FetchJsonParams {
        FetchJsonParams {
            url,
            headers: JsonMap::new(),
        }
    }

    #[tokio::test]
    async fn test_pretty_prints_document() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/data")
            .with_status(200)
            .with_body(r#"{"a":{"b":[true,null]}}"#)
            .create_async()
            .await;

        let tool = FetchJsonTool::new(Client::new());
        let text = tool.execute(params(format!("{}/data", server.url()))).await.unwrap();
        assert_eq!(
            text,
            "{\n  \"a\": {\n    \"b\": [\n      true,\n      null\n    ]\n  }\n}"
        );
    }

    #[tokio::test]
    async fn test_non_200_reports_status_only() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/created")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let tool = FetchJsonTool::new(Client::new());
        let err = tool
            .execute(params(format!("{}/created", server.url())))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 201");
    }

    #[tokio::test]
    async fn test_html_is_not_json() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let tool = FetchJsonTool::new(Client::new());
        let err = tool
            .execute(params(format!("{}/page", server.url())))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Response is not valid JSON"));
    }
}
