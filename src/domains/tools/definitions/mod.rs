//! Tool definitions module.
//!
//! One submodule per server family; each tool lives in its own file.

pub mod db;
pub mod medical;
pub mod terminal;
pub mod web;

pub use db::{
    DatabaseKind, DescribeTableTool, ExecuteQueryTool, InitSampleDataTool, ListTablesTool,
    SqlGateway, SqlParam,
};
pub use medical::{
    CmsMarketplacePlansTool, CovidStatsCountryTool, CovidStatsGlobalTool, FdaDeviceSearchTool,
    FdaDrugSearchTool, Icd11LookupTool, InfermedicaDiagnosisTool, NhsScotlandDataTool,
    NpiProviderLookupTool, NutritionFactsTool,
};
pub use terminal::RunCommandTool;
pub use web::{
    CheckStatusTool, DeleteRequestTool, FetchJsonTool, GetRequestTool, PostRequestTool,
    PutRequestTool,
};
