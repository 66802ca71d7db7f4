//! Tool tables - which handlers each server kind exposes, in listing order.

use std::sync::Arc;

use super::definitions::{
    CheckStatusTool, CmsMarketplacePlansTool, CovidStatsCountryTool, CovidStatsGlobalTool,
    DeleteRequestTool, DescribeTableTool, ExecuteQueryTool, FdaDeviceSearchTool,
    FdaDrugSearchTool, FetchJsonTool, GetRequestTool, Icd11LookupTool, InfermedicaDiagnosisTool,
    InitSampleDataTool, ListTablesTool, NhsScotlandDataTool, NpiProviderLookupTool,
    NutritionFactsTool, PostRequestTool, PutRequestTool, RunCommandTool, SqlGateway,
};
use super::handlers::ToolHandler;
use crate::core::config::{Config, HttpClientConfig, ServerKind};
use crate::core::{Error, Result};

/// Build the shared outbound HTTP client.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))
}

/// Build the handler list for the server kind named in `config`.
pub fn build_handlers(config: &Config) -> Result<Vec<Box<dyn ToolHandler>>> {
    let handlers: Vec<Box<dyn ToolHandler>> = match config.server.kind {
        ServerKind::Database => {
            let gateway = Arc::new(SqlGateway::new(&config.database));
            vec![
                Box::new(ExecuteQueryTool::new(gateway.clone())),
                Box::new(ListTablesTool::new(gateway.clone())),
                Box::new(DescribeTableTool::new(gateway.clone())),
                Box::new(InitSampleDataTool::new(gateway)),
            ]
        }
        ServerKind::MedicalApi => {
            let http = build_http_client(&config.http)?;
            let urls = &config.medical;
            vec![
                Box::new(Icd11LookupTool::new(http.clone(), &urls.icd11_base_url)),
                Box::new(FdaDrugSearchTool::new(http.clone(), &urls.fda_base_url)),
                Box::new(FdaDeviceSearchTool::new(http.clone(), &urls.fda_base_url)),
                Box::new(InfermedicaDiagnosisTool::new(
                    http.clone(),
                    &urls.infermedica_base_url,
                )),
                Box::new(NutritionFactsTool::new(http.clone(), &urls.nutritionix_base_url)),
                Box::new(NpiProviderLookupTool::new(http.clone(), &urls.npi_base_url)),
                Box::new(CmsMarketplacePlansTool::new(http.clone(), &urls.cms_base_url)),
                Box::new(CovidStatsGlobalTool::new(http.clone(), &urls.disease_base_url)),
                Box::new(CovidStatsCountryTool::new(http.clone(), &urls.disease_base_url)),
                Box::new(NhsScotlandDataTool::new(http, &urls.nhs_scotland_base_url)),
            ]
        }
        ServerKind::WebApi => {
            let http = build_http_client(&config.http)?;
            vec![
                Box::new(GetRequestTool::new(http.clone())),
                Box::new(PostRequestTool::new(http.clone())),
                Box::new(PutRequestTool::new(http.clone())),
                Box::new(DeleteRequestTool::new(http.clone())),
                Box::new(FetchJsonTool::new(http.clone())),
                Box::new(CheckStatusTool::new(http)),
            ]
        }
        ServerKind::Terminal => {
            vec![Box::new(RunCommandTool::new(config.terminal.workspace.clone()))]
        }
    };

    Ok(handlers)
}
