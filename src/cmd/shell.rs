// SPDX-License-Identifier: GPL-2.0-only

//! `Bash` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "Bash",
    cli: "shell",
    id: super::ids::SHELL,
    category: super::CommandCategory::Tools,
    run_for_selection: false,
    make,
    run,
    enabled: super::always_enabled,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Open a git shell in the work tree")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("gitbash", None)
}
