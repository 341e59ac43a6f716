// SPDX-License-Identifier: GPL-2.0-only

//! `SwitchBranch` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "SwitchBranch",
    cli: "switch-branch",
    id: super::ids::SWITCH_BRANCH,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Check out another branch")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("checkoutbranch", None)
}
