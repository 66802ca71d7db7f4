//! PUT request tool.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::common::{header_map, with_body};
use super::post::BodyRequestParams;
use crate::domains::tools::format::render_response;
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// PUT request tool.
pub struct PutRequestTool {
    http: Client,
}

impl PutRequestTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for PutRequestTool {
    const NAME: &'static str = "put_request";

    const DESCRIPTION: &'static str = "Make a PUT request to a URL";

    type Params = BodyRequestParams;

    async fn execute(&self, params: BodyRequestParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("PUT {} (json: {})", url, params.json_data);

        let headers = header_map(&params.headers)?;
        let response = with_body(self.http.put(url), headers, &params.data, params.json_data)
            .send()
            .await?;
        render_response(response).await
    }
}
