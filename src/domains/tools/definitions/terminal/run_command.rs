//! Run command tool.
//!
//! The command line goes to the platform shell unmodified, with the
//! workspace directory as its working directory. Output is captured; stdin
//! is closed.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domains::tools::{ToolDefinition, ToolError, ToolResult, require};

/// Parameters for the run command tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RunCommandParams {
    #[schemars(description = "The shell command to run")]
    pub command: String,
}

/// Run command tool.
pub struct RunCommandTool {
    workspace: PathBuf,
}

impl RunCommandTool {
    pub fn new(workspace: PathBuf) -> Self {
        Self { workspace }
    }

    #[cfg(not(windows))]
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }

    #[cfg(windows)]
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
}

#[async_trait]
impl ToolDefinition for RunCommandTool {
    const NAME: &'static str = "run_command";

    const DESCRIPTION: &'static str = "Run a terminal command inside the workspace directory. \
         If a terminal command can accomplish a task, tell the user you'll use this tool to \
         accomplish it. Returns stdout, or stderr when stdout is empty.";

    type Params = RunCommandParams;

    async fn execute(&self, params: RunCommandParams) -> ToolResult<String> {
        let command = require(&params.command, "command")?;
        info!("Running command in {}", self.workspace.display());
        debug!("Command: {}", command);

        let output = Self::shell(command)
            .current_dir(&self.workspace)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ToolError::execution_failed(format!(
                    "cannot run command in {}: {}",
                    self.workspace.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            return Ok(stdout.into_owned());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            return Ok(stderr.into_owned());
        }

        Ok(match output.status.code() {
            Some(code) => format!("Command completed with exit status {}", code),
            None => "Command terminated by signal".to_string(),
        })
    }
}
