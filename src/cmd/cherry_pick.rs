// SPDX-License-Identifier: GPL-2.0-only

//! `CherryPick` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "CherryPick",
    cli: "cherry-pick",
    id: super::ids::CHERRY_PICK,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Cherry-pick commits onto the current branch")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("cherry", None)
}
