// SPDX-License-Identifier: GPL-2.0-only

//! `Clone` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Clone",
    cli: "clone",
    id: super::ids::CLONE,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::always_enabled,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Clone a remote repository")
        .long_about(
            "Open the clone dialog. Remote URL, destination directory, and branch \
             are chosen in the dialog; this works outside any repository.",
        )
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("clone", None)
}
