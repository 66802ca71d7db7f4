//! DELETE request tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{JsonMap, header_map};
use crate::domains::tools::format::render_response;
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for the DELETE request tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteRequestParams {
    #[schemars(description = "The URL to make the DELETE request to")]
    pub url: String,

    #[serde(default)]
    #[schemars(description = "Optional headers to include in the request")]
    pub headers: JsonMap,
}

/// DELETE request tool.
pub struct DeleteRequestTool {
    http: Client,
}

impl DeleteRequestTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for DeleteRequestTool {
    const NAME: &'static str = "delete_request";

    const DESCRIPTION: &'static str = "Make a DELETE request to a URL";

    type Params = DeleteRequestParams;

    async fn execute(&self, params: DeleteRequestParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("DELETE {}", url);

        let response = self
            .http
            .delete(url)
            .headers(header_map(&params.headers)?)
            .send()
            .await?;
        render_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_delete_renders_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/users/7")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("deleted")
            .create_async()
            .await;

        let tool = DeleteRequestTool::new(Client::new());
        let text = tool
            .execute(DeleteRequestParams {
                url: format!("{}/users/7", server.url()),
                headers: JsonMap::new(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            text,
            "Status: 200\nContent-Type: text/plain\nResponse Length: 7 characters\n\ndeleted"
        );
    }
}
