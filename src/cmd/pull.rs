// SPDX-License-Identifier: GPL-2.0-only

//! `Pull` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Pull",
    cli: "pull",
    id: super::ids::PULL,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Pull changes from a remote repository")
        .long_about(
            "Open the pull dialog. The remote and merge strategy default to the \
             branch configuration; fetch-only and rebase variants are chosen in the \
             dialog.",
        )
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("pull", None)
}
