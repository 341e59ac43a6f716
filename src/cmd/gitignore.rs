// SPDX-License-Identifier: GPL-2.0-only

//! `GitIgnore` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "GitIgnore",
    cli: "gitignore",
    id: super::ids::GITIGNORE,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Edit the repository .gitignore")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("gitignore", None)
}
