//! Database tools module.
//!
//! - `execute_query`: run arbitrary SQL with positional parameters
//! - `list_tables`: list user tables
//! - `describe_table`: show a table's columns
//! - `init_sample_data`: (re)create the customers/products/orders sample schema
//!
//! All four go through [`SqlGateway`], which opens one connection per call.

pub mod describe_table;
pub mod execute_query;
pub mod gateway;
pub mod init_sample_data;
pub mod list_tables;
#[cfg(feature = "mysql")]
mod mysql;
mod sqlite;

pub use describe_table::{DescribeTableParams, DescribeTableTool};
pub use execute_query::{ExecuteQueryParams, ExecuteQueryTool};
pub use gateway::{DatabaseKind, SqlGateway, SqlParam};
pub use init_sample_data::{InitSampleDataParams, InitSampleDataTool};
pub use list_tables::{ListTablesParams, ListTablesTool};
