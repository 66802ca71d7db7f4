//! Medical API tools module.
//!
//! Thin clients over public health data services:
//! - `icd11_lookup`: WHO ICD-11 entities and search
//! - `fda_drug_search` / `fda_device_search`: openFDA
//! - `infermedica_diagnosis`: Infermedica diagnosis (API key)
//! - `nutrition_facts`: Nutritionix natural nutrients (API key)
//! - `npi_provider_lookup`: NPI registry
//! - `cms_marketplace_plans`: healthcare.gov marketplace (API key)
//! - `covid_stats_global` / `covid_stats_country`: disease.sh
//! - `nhs_scotland_data`: NHS Scotland open data
//!
//! Every tool returns the service's JSON re-indented, or an
//! `HTTP <status> - <body>` error for non-success answers.

pub mod cms;
pub mod common;
pub mod covid;
pub mod fda;
pub mod icd11;
pub mod infermedica;
pub mod nhs_scotland;
pub mod npi;
pub mod nutrition;

pub use cms::{CmsMarketplacePlansParams, CmsMarketplacePlansTool};
pub use covid::{
    CovidStatsCountryParams, CovidStatsCountryTool, CovidStatsGlobalParams, CovidStatsGlobalTool,
};
pub use fda::{FdaDeviceSearchTool, FdaDrugSearchTool, FdaSearchParams};
pub use icd11::{Icd11LookupParams, Icd11LookupTool};
pub use infermedica::{InfermedicaDiagnosisParams, InfermedicaDiagnosisTool, Sex};
pub use nhs_scotland::{NhsScotlandDataParams, NhsScotlandDataTool};
pub use npi::{NpiProviderLookupParams, NpiProviderLookupTool};
pub use nutrition::{NutritionFactsParams, NutritionFactsTool};
