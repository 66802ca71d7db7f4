//! Generic HTTP tools module.
//!
//! - `get_request`, `post_request`, `put_request`, `delete_request`:
//!   one request each, rendered by
//!   [`format_response`](crate::domains::tools::format::format_response)
//! - `fetch_json`: GET and re-indent a JSON document
//! - `check_status`: HEAD and report status line and a few headers

pub mod check_status;
pub mod common;
pub mod delete;
pub mod fetch_json;
pub mod get;
pub mod post;
pub mod put;

pub use check_status::{CheckStatusParams, CheckStatusTool};
pub use delete::{DeleteRequestParams, DeleteRequestTool};
pub use fetch_json::{FetchJsonParams, FetchJsonTool};
pub use get::{GetRequestParams, GetRequestTool};
pub use post::{BodyRequestParams, PostRequestTool};
pub use put::PutRequestTool;
