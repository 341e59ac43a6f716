// SPDX-License-Identifier: GPL-2.0-only

//! `About` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "About",
    cli: "about",
    id: super::ids::ABOUT,
    category: super::CommandCategory::Tools,
    run_for_selection: false,
    make,
    run,
    enabled: super::always_enabled,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Show the Git Extensions about dialog")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("about", None)
}
