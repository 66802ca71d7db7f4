//! Domains module containing the business logic of the servers.
//!
//! The only bounded context is `tools`: every server is a tool table.

pub mod tools;
