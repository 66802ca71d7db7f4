//! GET request tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{JsonMap, header_map, text_pairs};
use crate::domains::tools::format::render_response;
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for the GET request tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRequestParams {
    #[schemars(description = "The URL to make the GET request to")]
    pub url: String,

    #[serde(default)]
    #[schemars(description = "Optional headers to include in the request")]
    pub headers: JsonMap,

    #[serde(default)]
    #[schemars(description = "Optional query parameters")]
    pub params: JsonMap,
}

/// GET request tool.
pub struct GetRequestTool {
    http: Client,
}

impl GetRequestTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for GetRequestTool {
    const NAME: &'static str = "get_request";

    const DESCRIPTION: &'static str = "Make a GET request to a URL";

    type Params = GetRequestParams;

    async fn execute(&self, params: GetRequestParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("GET {}", url);

        let response = self
            .http
            .get(url)
            .headers(header_map(&params.headers)?)
            .query(&text_pairs(&params.params))
            .send()
            .await?;
        render_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolHandler;
    use crate::domains::tools::format::TRUNCATION_MARKER;
    use mockito::{Matcher, Server};

    fn args(value: serde_json::Value) -> rmcp::model::JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_get_with_headers_and_params() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/items")
            .match_header("x-token", "abc")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("q".into(), "rust".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items":[1,2]}"#)
            .create_async()
            .await;

        let tool = GetRequestTool::new(Client::new());
        let text = tool
            .call(args(serde_json::json!({
                "url": format!("{}/items", server.url()),
                "headers": { "X-Token": "abc" },
                "params": { "page": 2, "q": "rust" }
            })))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(text.starts_with("Status: 200\nContent-Type: application/json\n"));
        assert!(text.contains("Response Length: 15 characters"));
        assert!(text.ends_with("{\n  \"items\": [\n    1,\n    2\n  ]\n}"));
    }

    #[tokio::test]
    async fn test_long_html_is_truncated() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("a".repeat(3000))
            .create_async()
            .await;

        let tool = GetRequestTool::new(Client::new());
        let text = tool
            .call(args(serde_json::json!({ "url": format!("{}/page", server.url()) })))
            .await
            .unwrap();

        assert!(text.contains("Response Length: 3000 characters"));
        assert!(text.ends_with(&format!("{}{}", "a".repeat(2000), TRUNCATION_MARKER)));
    }

    #[tokio::test]
    async fn test_server_errors_are_rendered_not_failed() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/broken")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let tool = GetRequestTool::new(Client::new());
        let text = tool
            .call(args(serde_json::json!({ "url": format!("{}/broken", server.url()) })))
            .await
            .unwrap();
        assert!(text.starts_with("Status: 500\n"));
        assert!(text.ends_with("\n\nboom"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let tool = GetRequestTool::new(Client::new());
        let err = tool
            .call(args(serde_json::json!({ "url": "http://127.0.0.1:1/" })))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Request failed:"));
    }
}
