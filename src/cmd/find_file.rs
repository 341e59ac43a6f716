// SPDX-License-Identifier: GPL-2.0-only

//! `FindFile` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "FindFile",
    cli: "find-file",
    id: super::ids::FIND_FILE,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Search for a file in the repository")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("searchfile", None)
}
