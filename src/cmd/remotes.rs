// SPDX-License-Identifier: GPL-2.0-only

//! `Remotes` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Remotes",
    cli: "remotes",
    id: super::ids::REMOTES,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Manage remote repositories")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("remotes", None)
}
