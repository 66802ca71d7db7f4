//! openFDA search tools (drug labels and 510(k) devices).

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{default_limit, endpoint, send_json, validate_limit};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters shared by both openFDA tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FdaSearchParams {
    #[schemars(description = "Drug or device name to search for (e.g., 'aspirin')")]
    pub search_term: String,

    #[serde(default = "default_limit")]
    #[schemars(description = "Number of results to return (default: 5, max: 100)")]
    pub limit: u32,
}

/// openFDA drug label search.
pub struct FdaDrugSearchTool {
    http: Client,
    base_url: String,
}

impl FdaDrugSearchTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Match either the brand or the generic name.
    pub fn search_expression(term: &str) -> String {
        format!("openfda.brand_name:{} OR openfda.generic_name:{}", term, term)
    }
}

#[async_trait]
impl ToolDefinition for FdaDrugSearchTool {
    const NAME: &'static str = "fda_drug_search";

    const DESCRIPTION: &'static str = "Search FDA drug labels by brand or generic name";

    type Params = FdaSearchParams;

    async fn execute(&self, params: FdaSearchParams) -> ToolResult<String> {
        let term = require(&params.search_term, "search_term")?;
        let limit = validate_limit(params.limit);
        info!("FDA drug search: {} (limit {})", term, limit);

        let url = endpoint(&self.base_url, &["drug", "label.json"])?;
        let request = self.http.get(url).query(&[
            ("search", Self::search_expression(term)),
            ("limit", limit.to_string()),
        ]);
        send_json(request).await
    }
}

/// openFDA 510(k) device search.
pub struct FdaDeviceSearchTool {
    http: Client,
    base_url: String,
}

impl FdaDeviceSearchTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for FdaDeviceSearchTool {
    const NAME: &'static str = "fda_device_search";

    const DESCRIPTION: &'static str = "Search FDA medical device 510(k) clearances by device name";

    type Params = FdaSearchParams;

    async fn execute(&self, params: FdaSearchParams) -> ToolResult<String> {
        let term = require(&params.search_term, "search_term")?;
        let limit = validate_limit(params.limit);
        info!("FDA device search: {} (limit {})", term, limit);

        let url = endpoint(&self.base_url, &["device", "510k.json"])?;
        let request = self.http.get(url).query(&[
            ("search", format!("device_name:{}", term)),
            ("limit", limit.to_string()),
        ]);
        send_json(request).await
    }
}
