// SPDX-License-Identifier: GPL-2.0-only

//! `Difftool` command implementation.

use anyhow::{anyhow, Result};

use crate::argset;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Difftool",
    cli: "difftool",
    id: super::ids::DIFFTOOL,
    category: super::CommandCategory::WorkingTree,
    run_for_selection: false,
    make,
    run,
    enabled: super::document_in_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Open the diff tool for a file")
        .long_about(
            "Open the configured diff tool comparing the working tree version of a \
             file against the index.\n\
             \n\
             The file defaults to the host's active document; pass a path to compare \
             a different file.",
        )
        .arg(argset::path_arg())
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    let path = ctx
        .target_file()
        .ok_or_else(|| anyhow!("`difftool` needs a file; pass a path or focus a document"))?;
    ctx.gitex().run_op("difftool", Some(&path))
}
