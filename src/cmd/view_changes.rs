// SPDX-License-Identifier: GPL-2.0-only

//! `ViewChanges` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "ViewChanges",
    cli: "view-changes",
    id: super::ids::VIEW_CHANGES,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("View uncommitted changes")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("viewdiff", None)
}
