// SPDX-License-Identifier: GPL-2.0-only

//! Git Extensions command implementations.
//!
//! Each command is in its own module. The [`COMMANDS`] slice constant is the
//! registration table: one [`GitExtCommand`] per command, in the order the host
//! command table declares them, with the stable names and identifiers other
//! Git Extensions integrations use.

pub(crate) mod about;
pub(crate) mod apply_patch;
pub(crate) mod browse;
pub(crate) mod cherry_pick;
pub(crate) mod clone;
pub(crate) mod commit;
pub(crate) mod create_branch;
pub(crate) mod difftool;
pub(crate) mod file_history;
pub(crate) mod find_file;
pub(crate) mod format_patch;
pub(crate) mod gitignore;
pub(crate) mod init;
pub(crate) mod merge;
pub(crate) mod pull;
pub(crate) mod push;
pub(crate) mod rebase;
pub(crate) mod remotes;
pub(crate) mod reset_changes;
pub(crate) mod settings;
pub(crate) mod shell;
pub(crate) mod solve_conflicts;
pub(crate) mod stash;
pub(crate) mod switch_branch;
pub(crate) mod view_changes;

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    gitex::{self, GitexContext},
    host::Host,
    output::OutputPane,
};

/// Stable numeric command identifier, as used by host command tables.
pub(crate) type CommandId = u32;

/// Command categories, mirroring the menu grouping of the host integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommandCategory {
    WorkingTree,
    Repository,
    Branches,
    Patches,
    Tools,
}

impl CommandCategory {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            CommandCategory::WorkingTree => "working-tree",
            CommandCategory::Repository => "repository",
            CommandCategory::Branches => "branches",
            CommandCategory::Patches => "patches",
            CommandCategory::Tools => "tools",
        }
    }
}

/// Entry point for one Git Extensions command.
pub(crate) struct GitExtCommand {
    /// Stable command-table name, shared with the other integrations.
    pub name: &'static str,

    /// Subcommand name in the terminal driver.
    pub cli: &'static str,

    /// Stable numeric identifier.
    pub id: CommandId,

    /// Category the command belongs in.
    pub category: CommandCategory,

    /// Target the host's selected item instead of the active document.
    pub run_for_selection: bool,

    /// Function pointer for making the [`clap::Command`] for the driver.
    pub make: fn() -> clap::Command,

    /// Function pointer for running the command.
    pub run: fn(&ExecContext) -> Result<()>,

    /// Function pointer deciding whether the command is available in the host.
    pub enabled: fn(&dyn Host) -> bool,
}

/// Everything a running command gets to see: the host and the diagnostic pane.
pub(crate) struct ExecContext<'a> {
    pub(crate) host: &'a dyn Host,
    pub(crate) pane: Option<&'a OutputPane>,
    pub(crate) for_selection: bool,
}

impl ExecContext<'_> {
    /// The file the command operates on.
    pub(crate) fn target_file(&self) -> Option<PathBuf> {
        if self.for_selection {
            self.host.selected_file()
        } else {
            self.host.active_document()
        }
    }

    pub(crate) fn gitex(&self) -> GitexContext {
        GitexContext::discover(self.target_file().as_deref())
    }

    /// Write a line to the diagnostic pane, if one was acquired.
    pub(crate) fn report(&self, line: &str) {
        if let Some(pane) = self.pane {
            pane.write_line(line);
        }
    }
}

fn always_enabled(_host: &dyn Host) -> bool {
    true
}

fn requires_work_tree(host: &dyn Host) -> bool {
    gitex::inside_work_tree(host.active_document().as_deref())
}

fn document_in_work_tree(host: &dyn Host) -> bool {
    host.active_document()
        .is_some_and(|path| gitex::inside_work_tree(Some(&path)))
}

/// Stable command identifiers from the host command table.
pub(crate) mod ids {
    use super::CommandId;

    pub(crate) const DIFFTOOL: CommandId = 0x100;
    pub(crate) const FILE_HISTORY: CommandId = 0x101;
    pub(crate) const RESET_CHANGES: CommandId = 0x102;
    pub(crate) const BROWSE: CommandId = 0x103;
    pub(crate) const CLONE: CommandId = 0x104;
    pub(crate) const INIT: CommandId = 0x105;
    pub(crate) const COMMIT: CommandId = 0x106;
    pub(crate) const PULL: CommandId = 0x107;
    pub(crate) const PUSH: CommandId = 0x108;
    pub(crate) const STASH: CommandId = 0x109;
    pub(crate) const REMOTES: CommandId = 0x10a;
    pub(crate) const GITIGNORE: CommandId = 0x10b;
    pub(crate) const APPLY_PATCH: CommandId = 0x10c;
    pub(crate) const FORMAT_PATCH: CommandId = 0x10d;
    pub(crate) const VIEW_CHANGES: CommandId = 0x10e;
    pub(crate) const FIND_FILE: CommandId = 0x10f;
    pub(crate) const SWITCH_BRANCH: CommandId = 0x110;
    pub(crate) const CREATE_BRANCH: CommandId = 0x111;
    pub(crate) const MERGE: CommandId = 0x112;
    pub(crate) const REBASE: CommandId = 0x113;
    pub(crate) const SOLVE_CONFLICTS: CommandId = 0x114;
    pub(crate) const CHERRY_PICK: CommandId = 0x115;
    pub(crate) const SHELL: CommandId = 0x116;
    pub(crate) const SETTINGS: CommandId = 0x117;
    pub(crate) const ABOUT: CommandId = 0x118;
}

/// The registration table.
///
/// Order, names, and identifiers are the compatibility surface with existing host
/// command tables; do not renumber.
pub(crate) const COMMANDS: &[GitExtCommand] = &[
    difftool::COMMAND,
    file_history::COMMAND,
    reset_changes::COMMAND,
    browse::COMMAND,
    clone::COMMAND,
    init::COMMAND,
    commit::COMMAND,
    pull::COMMAND,
    push::COMMAND,
    stash::COMMAND,
    remotes::COMMAND,
    gitignore::COMMAND,
    apply_patch::COMMAND,
    format_patch::COMMAND,
    view_changes::COMMAND,
    find_file::COMMAND,
    switch_branch::COMMAND,
    create_branch::COMMAND,
    merge::COMMAND,
    rebase::COMMAND,
    solve_conflicts::COMMAND,
    cherry_pick::COMMAND,
    shell::COMMAND,
    settings::COMMAND,
    about::COMMAND,
];

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, path::PathBuf};

    use super::{ExecContext, COMMANDS};
    use crate::host::testing::MockHost;

    #[test]
    fn table_ids_are_unique_and_nonzero() {
        let mut seen = HashSet::new();
        for command in COMMANDS {
            assert_ne!(command.id, 0, "{} has a reserved id", command.name);
            assert!(seen.insert(command.id), "duplicate id {:#x}", command.id);
        }
    }

    #[test]
    fn table_names_are_unique() {
        let mut names = HashSet::new();
        let mut clis = HashSet::new();
        for command in COMMANDS {
            assert!(names.insert(command.name), "duplicate name {}", command.name);
            assert!(clis.insert(command.cli), "duplicate cli name {}", command.cli);
        }
    }

    #[test]
    fn clap_command_names_match_cli_names() {
        for command in COMMANDS {
            assert_eq!((command.make)().get_name(), command.cli);
        }
    }

    #[test]
    fn table_matches_host_command_table() {
        let names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        assert_eq!(
            names,
            vec![
                "Difftool",
                "ShowFileHistory",
                "ResetChanges",
                "Browse",
                "Clone",
                "CreateNewRepository",
                "Commit",
                "Pull",
                "Push",
                "Stash",
                "Remotes",
                "GitIgnore",
                "ApplyPatch",
                "FormatPatch",
                "ViewChanges",
                "FindFile",
                "SwitchBranch",
                "CreateBranch",
                "Merge",
                "Rebase",
                "SolveMergeConflicts",
                "CherryPick",
                "Bash",
                "Settings",
                "About",
            ]
        );
        let ids: Vec<u32> = COMMANDS.iter().map(|command| command.id).collect();
        assert_eq!(ids, (0x100..=0x118).collect::<Vec<u32>>());
    }

    #[test]
    fn builtin_table_has_no_selection_variants() {
        assert!(COMMANDS.iter().all(|command| !command.run_for_selection));
    }

    #[test]
    fn selection_flag_switches_target() {
        let host = MockHost {
            active: Some(PathBuf::from("/work/repo/active.rs")),
            selected: Some(PathBuf::from("/work/repo/selected.rs")),
            ..Default::default()
        };
        let ctx = ExecContext {
            host: &host,
            pane: None,
            for_selection: false,
        };
        assert_eq!(ctx.target_file(), Some(PathBuf::from("/work/repo/active.rs")));
        // Reporting without a pane is a no-op, not a failure.
        ctx.report("ignored");

        let ctx = ExecContext {
            host: &host,
            pane: None,
            for_selection: true,
        };
        assert_eq!(
            ctx.target_file(),
            Some(PathBuf::from("/work/repo/selected.rs"))
        );
    }
}
