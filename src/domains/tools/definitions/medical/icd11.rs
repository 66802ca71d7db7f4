//! WHO ICD-11 lookup tool.
//!
//! Fetches one entity by id, or runs a search against the 2024-01 MMS
//! linearization when only a search term is given.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolError, ToolResult, present};

const MMS_RELEASE: &[&str] = &["icd", "release", "11", "2024-01", "mms", "search"];

/// Parameters for the ICD-11 lookup tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct Icd11LookupParams {
    /// Entity id, takes precedence over `search_term`.
    #[schemars(description = "ICD-11 entity ID to look up (e.g., '1435254666')")]
    pub entity_id: Option<String>,

    #[schemars(description = "Medical condition or term to search for")]
    pub search_term: Option<String>,
}

/// ICD-11 lookup tool.
pub struct Icd11LookupTool {
    http: Client,
    base_url: String,
}

impl Icd11LookupTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for Icd11LookupTool {
    const NAME: &'static str = "icd11_lookup";

    const DESCRIPTION: &'static str = "Look up ICD-11 codes and medical conditions from WHO. \
         Provide either an entity_id or a search_term.";

    type Params = Icd11LookupParams;

    async fn execute(&self, params: Icd11LookupParams) -> ToolResult<String> {
        let request = if let Some(id) = present(&params.entity_id) {
            info!("ICD-11 entity lookup: {}", id);
            self.http
                .get(endpoint(&self.base_url, &["icd", "entity", id])?)
        } else if let Some(term) = present(&params.search_term) {
            info!("ICD-11 search: {}", term);
            self.http
                .get(endpoint(&self.base_url, MMS_RELEASE)?)
                .query(&[("q", term)])
        } else {
            return Err(ToolError::missing("entity_id or search_term"));
        };

        let request = request
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, "en")
            .header("API-Version", "v2");

        send_json(request).await
    }
}
