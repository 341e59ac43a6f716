// SPDX-License-Identifier: GPL-2.0-only

//! `Stash` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Stash",
    cli: "stash",
    id: super::ids::STASH,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Stash or restore working tree changes")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("stash", None)
}
