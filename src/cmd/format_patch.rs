// SPDX-License-Identifier: GPL-2.0-only

//! `FormatPatch` command implementation.

use anyhow::Result;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "FormatPatch",
    cli: "format-patch",
    id: super::ids::FORMAT_PATCH,
    category: super::CommandCategory::Patches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli).about("Export commits as patch files")
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    ctx.gitex().run_op("formatpatch", None)
}
