// SPDX-License-Identifier: GPL-2.0-only

//! Traits to extend [`std::process::Command`] for running `gitex`.

use std::process::{Command, Output};

use anyhow::{anyhow, Context, Result};
use bstr::ByteSlice;

const GITEX_EXEC_FAIL: &str = "could not execute `gitex`";

pub(super) trait GitexCommand {
    /// Run the gitex command, wait for completion, and collect its output streams.
    fn output_gitex(&mut self) -> Result<Output>;
}

impl GitexCommand for Command {
    fn output_gitex(&mut self) -> Result<Output> {
        self.output().context(GITEX_EXEC_FAIL)
    }
}

pub(super) trait GitexOutput {
    /// Ensure the process exited successfully, returning its output.
    fn require_success(self, op: &str) -> Result<Output>;
}

impl GitexOutput for Output {
    fn require_success(self, op: &str) -> Result<Output> {
        if self.status.success() {
            Ok(self)
        } else {
            Err(gitex_command_error(op, &self.stderr))
        }
    }
}

pub(super) fn gitex_command_error(op: &str, stderr: &[u8]) -> anyhow::Error {
    let err_str = stderr.to_str_lossy();
    let err_str = err_str.trim_end();
    let error = if err_str.is_empty() {
        anyhow!("exited with failure")
    } else {
        anyhow!(err_str.to_string())
    };
    error.context(format!("`gitex {op}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_carries_trimmed_stderr() {
        let error = gitex_command_error("pull", b"fatal: no remote configured\n");
        assert_eq!(format!("{error:#}"), "`gitex pull`: fatal: no remote configured");
    }

    #[test]
    fn command_error_without_stderr() {
        let error = gitex_command_error("about", b"");
        assert_eq!(format!("{error:#}"), "`gitex about`: exited with failure");
    }
}
