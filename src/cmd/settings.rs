// SPDX-License-Identifier: GPL-2.0-only

//! `Settings` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Settings",
    cli: "settings",
    id: super::ids::SETTINGS,
    category: super::CommandCategory::Tools,
    run_for_selection: false,
    make,
    run,
    enabled: super::always_enabled,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Open the Git Extensions settings dialog")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("settings", None)
}
