// SPDX-License-Identifier: GPL-2.0-only

//! `Commit` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Commit",
    cli: "commit",
    id: super::ids::COMMIT,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Open the commit dialog")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("commit", None)
}
