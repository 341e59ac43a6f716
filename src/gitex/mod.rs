// SPDX-License-Identifier: GPL-2.0-only

//! Execute operations with `gitex`, the Git Extensions command line.
//!
//! Every user-visible operation ends up here: a `gitex <op> [path]` child process run
//! in the repository work tree. The executable is found via the `GITEX_PATH`
//! environment variable, the `gitext.path` git config key, or `PATH`, in that order.

mod command;

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Result;
use bstr::ByteSlice;

use self::command::{GitexCommand, GitexOutput};

/// Context for running gitex operations.
#[derive(Clone, Debug)]
pub(crate) struct GitexContext {
    program: OsString,
    work_dir: Option<PathBuf>,
}

impl GitexContext {
    /// Resolve the executable and work tree for an operation targeting `start`.
    ///
    /// `start` is the target file (or directory) of the operation; the containing
    /// repository is discovered from there, falling back to the current directory.
    /// Not being in a repository is fine: clone, init, and the tool commands run
    /// anywhere, and gitex itself prompts for a repository when it needs one.
    pub(crate) fn discover(start: Option<&Path>) -> Self {
        let repo = gix::discover(start_dir(start)).ok();
        let work_dir = repo
            .as_ref()
            .and_then(|repo| repo.work_dir())
            .map(Path::to_path_buf);
        let program = resolve_program(std::env::var_os("GITEX_PATH"), repo.as_ref());
        Self { program, work_dir }
    }

    fn gitex(&self) -> Command {
        let mut command = Command::new(&self.program);
        if let Some(work_dir) = &self.work_dir {
            command.current_dir(work_dir);
        }
        command
    }

    /// Launch `gitex <op> [path]` and wait for it to finish.
    pub(crate) fn run_op(&self, op: &str, path: Option<&Path>) -> Result<()> {
        let mut command = self.gitex();
        command.arg(op);
        if let Some(path) = path {
            command.arg(path);
        }
        command.output_gitex()?.require_success(op)?;
        Ok(())
    }
}

/// Whether `start` (or the current directory) is inside a git work tree.
pub(crate) fn inside_work_tree(start: Option<&Path>) -> bool {
    gix::discover(start_dir(start))
        .ok()
        .and_then(|repo| repo.work_dir().map(Path::to_path_buf))
        .is_some()
}

fn start_dir(start: Option<&Path>) -> PathBuf {
    match start {
        Some(path) if path.is_dir() => path.to_path_buf(),
        Some(path) => match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        None => PathBuf::from("."),
    }
}

fn resolve_program(env_program: Option<OsString>, repo: Option<&gix::Repository>) -> OsString {
    if let Some(program) = env_program {
        if !program.is_empty() {
            return program;
        }
    }
    if let Some(repo) = repo {
        if let Some(program) = repo
            .config_snapshot()
            .string("gitext.path")
            .map(|bs| bs.to_str_lossy().into_owned())
            .filter(|program| !program.is_empty())
        {
            return program.into();
        }
    }
    "gitex".into()
}
