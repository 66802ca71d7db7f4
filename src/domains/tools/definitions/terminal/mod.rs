//! Terminal tools module.
//!
//! - `run_command`: run a shell command inside the configured workspace

pub mod run_command;

pub use run_command::{RunCommandParams, RunCommandTool};
