// SPDX-License-Identifier: GPL-2.0-only

//! `Browse` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Browse",
    cli: "browse",
    id: super::ids::BROWSE,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Open the repository browser")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("browse", None)
}
