// SPDX-License-Identifier: GPL-2.0-only

//! `CreateNewRepository` command implementation.

use anyhow::Result;

use crate::argset;

pub(super) const COMMAND: super::GitExtCommand = super::GitExtCommand {
    name: "CreateNewRepository",
    cli: "init",
    id: super::ids::INIT,
    category: super::CommandCategory::Repository,
    run_for_selection: false,
    make,
    run,
    enabled: super::always_enabled,
};

fn make() -> clap::Command {
    clap::Command::new(COMMAND.cli)
        .about("Create a new repository")
        .arg(argset::path_arg().help("Directory to initialize"))
}

fn run(ctx: &super::ExecContext) -> Result<()> {
    let path = ctx.target_file();
    ctx.gitex().run_op("init", path.as_deref())
}
