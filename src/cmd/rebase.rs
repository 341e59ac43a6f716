// SPDX-License-Identifier: GPL-2.0-only

//! `Rebase` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Rebase",
    cli: "rebase",
    id: super::ids::REBASE,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Rebase the current branch onto another branch")
        .long_about(
            "Open the rebase dialog for the current branch. Interactive rebase and \
             conflict resolution happen in the dialog; a rebase already in progress \
             is picked up where it stopped.",
        )
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("rebase", None)
}
