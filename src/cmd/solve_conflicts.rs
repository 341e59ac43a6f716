// SPDX-License-Identifier: GPL-2.0-only

//! `SolveMergeConflicts` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "SolveMergeConflicts",
    cli: "solve-conflicts",
    id: super::ids::SOLVE_CONFLICTS,
    category: super::CommandCategory::Branches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Resolve outstanding merge conflicts")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("mergeconflicts", None)
}
