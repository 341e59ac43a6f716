// SPDX-License-Identifier: GPL-2.0-only

//! `ApplyPatch` command implementation.

use anyhow::Result;

use crate::argset;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "ApplyPatch",
    cli: "apply-patch",
    id: super::ids::APPLY_PATCH,
    category: super::CommandCategory::Patches,
    run_for_selection: false,
    make,
    run,
    enabled: super::requires_work_tree,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Apply a patch file")
        .arg(argset::path_arg().help("Patch file to apply"))
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    let path = ctx.target_file();
    ctx.gitex().run_op("applypatch", path.as_deref())
}
