// SPDX-License-Identifier: GPL-2.0-only

//! `CreateBranch` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "CreateBranch",
    cli: "create-branch",
    id: super::ids::CREATE_BRANCH,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Create a branch at the current head")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("branch", None)
}
