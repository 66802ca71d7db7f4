//! NHS Scotland open data (CKAN datastore) search tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolResult, present, require};

/// Parameters for the NHS Scotland data tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NhsScotlandDataParams {
    #[schemars(description = "Resource ID for the dataset")]
    pub resource_id: String,

    #[schemars(description = "Full-text search query")]
    pub query: Option<String>,
}

/// NHS Scotland data tool.
pub struct NhsScotlandDataTool {
    http: Client,
    base_url: String,
}

impl NhsScotlandDataTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for NhsScotlandDataTool {
    const NAME: &'static str = "nhs_scotland_data";

    const DESCRIPTION: &'static str = "Search NHS Scotland open data";

    type Params = NhsScotlandDataParams;

    async fn execute(&self, params: NhsScotlandDataParams) -> ToolResult<String> {
        let resource_id = require(&params.resource_id, "resource_id")?;
        info!("NHS Scotland datastore search on {}", resource_id);

        let mut query = vec![("resource_id", resource_id)];
        if let Some(q) = present(&params.query) {
            query.push(("q", q));
        }

        let url = endpoint(&self.base_url, &["api", "3", "action", "datastore_search"])?;
        send_json(self.http.get(url).query(&query)).await
    }
}
