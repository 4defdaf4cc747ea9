use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use crate::error::PyenvError;

/// Captured result of one subprocess run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Seam between the adapter and the external tool.
///
/// The adapter never inspects anything beyond exit status, stdout and stderr,
/// so this is the whole subprocess contract. Tests substitute their own
/// implementations to assert which commands were (or were not) spawned.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        envs: &[(String, String)],
    ) -> Result<CommandOutput, PyenvError>;
}

/// Real runner: spawns the tool and blocks until it exits. No timeout and no
/// retry; an unresponsive tool blocks the whole call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        envs: &[(String, String)],
    ) -> Result<CommandOutput, PyenvError> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output().await?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
