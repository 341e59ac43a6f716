// SPDX-License-Identifier: GPL-2.0-only

//! `ShowFileHistory` command implementation.

use anyhow::{anyhow, Result};

use crate::argset;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "ShowFileHistory",
    cli: "file-history",
    id: super::ids::FILE_HISTORY,
    category: super::CommandCategory::WorkingTree,
    run_for_selection: false,
    make,
    run,
    enabled: super::document_in_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Show the commit history of a file")
        .arg(argset::path_arg())
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    let path = ctx
        .target_file()
        .ok_or_else(|| anyhow!("`file-history` needs a file; pass a path or focus a document"))?;
    ctx.gitex().run_op("filehistory", Some(&path))
}
