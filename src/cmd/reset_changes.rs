// SPDX-License-Identifier: GPL-2.0-only

//! `ResetChanges` command implementation.

use anyhow::{anyhow, Result};

use crate::argset;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "ResetChanges",
    cli: "reset-changes",
    id: super::ids::RESET_CHANGES,
    category: super::CommandCategory::WorkingTree,
    run_for_selection: false,
    make,
    run,
    enabled: super::document_in_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Revert local changes to a file")
        .long_about(
            "Open the revert dialog for a file, discarding local modifications once \
             confirmed. The dialog asks for confirmation; nothing is discarded before \
             that.",
        )
        .arg(argset::path_arg())
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    let path = ctx
        .target_file()
        .ok_or_else(|| anyhow!("`reset-changes` needs a file; pass a path or focus a document"))?;
    ctx.report(&format!("reverting local changes to `{}`", path.display()));
    ctx.gitex().run_op("revert", Some(&path))
}
