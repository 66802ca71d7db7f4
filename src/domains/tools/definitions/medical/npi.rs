//! NPI registry provider lookup tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolError, ToolResult, present};

const API_VERSION: &str = "2.1";

/// Parameters for the NPI provider lookup tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NpiProviderLookupParams {
    #[schemars(description = "10-digit NPI number")]
    pub npi_number: Option<String>,

    #[schemars(description = "Provider name (first and last)")]
    pub provider_name: Option<String>,

    #[schemars(description = "State abbreviation (e.g., 'CA', 'NY')")]
    pub state: Option<String>,
}

/// NPI provider lookup tool.
pub struct NpiProviderLookupTool {
    http: Client,
    base_url: String,
}

impl NpiProviderLookupTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Query pairs for the registry, or `None` without a number or name.
    ///
    /// A number wins over a name. A single-word name is searched as a last
    /// name; otherwise the first word is the first name and the rest the
    /// last name.
    pub fn query_pairs(params: &NpiProviderLookupParams) -> Option<Vec<(&'static str, String)>> {
        let mut pairs = vec![("version", API_VERSION.to_string())];

        if let Some(number) = present(&params.npi_number) {
            pairs.push(("number", number.to_string()));
        } else if let Some(name) = present(&params.provider_name) {
            let parts: Vec<&str> = name.split_whitespace().collect();
            match parts.as_slice() {
                [last] => pairs.push(("last_name", last.to_string())),
                [first, rest @ ..] => {
                    pairs.push(("first_name", first.to_string()));
                    pairs.push(("last_name", rest.join(" ")));
                }
                [] => return None,
            }
        } else {
            return None;
        }

        if let Some(state) = present(&params.state) {
            pairs.push(("state", state.to_string()));
        }
        Some(pairs)
    }
}

#[async_trait]
impl ToolDefinition for NpiProviderLookupTool {
    const NAME: &'static str = "npi_provider_lookup";

    const DESCRIPTION: &'static str =
        "Look up healthcare provider information using NPI number or name";

    type Params = NpiProviderLookupParams;

    async fn execute(&self, params: NpiProviderLookupParams) -> ToolResult<String> {
        let pairs = Self::query_pairs(&params)
            .ok_or_else(|| ToolError::missing("npi_number or provider_name"))?;
        info!("NPI lookup with {} filter(s)", pairs.len() - 1);

        let request = self
            .http
            .get(endpoint(&self.base_url, &["api", ""])?)
            .query(&pairs);
        send_json(request).await
    }
}
