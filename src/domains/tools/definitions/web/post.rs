//! POST request tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{JsonMap, default_true, header_map, with_body};
use crate::domains::tools::format::render_response;
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for requests that carry a body (POST and PUT).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BodyRequestParams {
    #[schemars(description = "The URL to send the request to")]
    pub url: String,

    #[serde(default)]
    #[schemars(description = "Data to send in the request body")]
    pub data: JsonMap,

    #[serde(default)]
    #[schemars(description = "Optional headers to include in the request")]
    pub headers: JsonMap,

    /// JSON document when true, form fields otherwise.
    #[serde(default = "default_true")]
    #[schemars(description = "Whether to send data as JSON (default: true)")]
    pub json_data: bool,
}

/// POST request tool.
pub struct PostRequestTool {
    http: Client,
}

impl PostRequestTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for PostRequestTool {
    const NAME: &'static str = "post_request";

    const DESCRIPTION: &'static str = "Make a POST request to a URL";

    type Params = BodyRequestParams;

    async fn execute(&self, params: BodyRequestParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("POST {} (json: {})", url, params.json_data);

        let headers = header_map(&params.headers)?;
        let response = with_body(self.http.post(url), headers, &params.data, params.json_data)
            .send()
            .await?;
        render_response(response).await
    }
}
