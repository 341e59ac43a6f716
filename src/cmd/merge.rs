// SPDX-License-Identifier: GPL-2.0-only

//! `Merge` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Merge",
    cli: "merge",
    id: super::ids::MERGE,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Merge a branch into the current branch")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("merge", None)
}
