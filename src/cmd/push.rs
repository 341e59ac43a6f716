// SPDX-License-Identifier: GPL-2.0-only

//! `Push` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Push",
    cli: "push",
    id: super::ids::PUSH,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Push the current branch to its remote")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("push", None)
}
