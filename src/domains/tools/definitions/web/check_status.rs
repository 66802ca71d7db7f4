//! Check status tool: a HEAD request summarized as text.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, SERVER};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::format::header_text;
use crate::domains::tools::{ToolDefinition, ToolResult, require};

const UNKNOWN: &str = "Unknown";

/// Parameters for the check status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckStatusParams {
    #[schemars(description = "The URL to check")]
    pub url: String,
}

/// Check status tool.
pub struct CheckStatusTool {
    http: Client,
}

impl CheckStatusTool {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ToolDefinition for CheckStatusTool {
    const NAME: &'static str = "check_status";

    const DESCRIPTION: &'static str = "Check the HTTP status of a URL";

    type Params = CheckStatusParams;

    async fn execute(&self, params: CheckStatusParams) -> ToolResult<String> {
        let url = require(&params.url, "url")?;
        info!("HEAD {}", url);

        let response = self.http.head(url).send().await?;
        let status = response.status();
        let header =
            |name: &str| header_text(&response, name).unwrap_or_else(|| UNKNOWN.to_string());

        Ok(format!(
            "URL: {}\nStatus: {}\nStatus Text: {}\nServer: {}\nContent-Type: {}\n\
             Content-Length: {}\n",
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or(UNKNOWN),
            header(SERVER.as_str()),
            header(CONTENT_TYPE.as_str()),
            header(CONTENT_LENGTH.as_str()),
        ))
    }
}
