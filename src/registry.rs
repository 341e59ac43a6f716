// SPDX-License-Identifier: GPL-2.0-only

//! Command registry.
//!
//! Maps both the stable numeric command identifier and the stable command-table name
//! to a [`GitExtCommand`] entry. The registry is populated exactly once, from a fixed
//! table; lookups that miss are a normal outcome, not an error.

use std::collections::BTreeMap;

use crate::cmd::{CommandId, GitExtCommand};

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("command `{0}` registered with reserved id 0")]
    ReservedId(String),

    #[error("command id {0:#x} registered with an empty name")]
    EmptyName(CommandId),
}

#[derive(Default)]
pub(crate) struct Registry {
    by_id: BTreeMap<CommandId, &'static GitExtCommand>,
    by_name: BTreeMap<&'static str, &'static GitExtCommand>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name` and `id`, updating both mappings together.
    ///
    /// Id 0 is reserved in host command tables and an empty name cannot be looked up,
    /// so both are rejected. Re-registering an existing name or id is not defended
    /// against: the table is hand-authored, and the last write wins.
    pub(crate) fn register(
        &mut self,
        name: &'static str,
        command: &'static GitExtCommand,
        id: CommandId,
    ) -> Result<(), Error> {
        if id == 0 {
            return Err(Error::ReservedId(name.to_string()));
        }
        if name.is_empty() {
            return Err(Error::EmptyName(id));
        }
        self.by_name.insert(name, command);
        self.by_id.insert(id, command);
        Ok(())
    }

    pub(crate) fn lookup_by_id(&self, id: CommandId) -> Option<&'static GitExtCommand> {
        self.by_id.get(&id).copied()
    }

    pub(crate) fn lookup_by_name(&self, name: &str) -> Option<&'static GitExtCommand> {
        self.by_name.get(name).copied()
    }

    /// Registered entries in ascending id order.
    pub(crate) fn commands(&self) -> impl Iterator<Item = &'static GitExtCommand> + '_ {
        self.by_id.values().copied()
    }
}

/// Build a registry from `table`, registering entries in order.
///
/// The first failing registration abandons the rest of the table. The partial registry
/// is returned along with the error so initialization can report it without dying.
pub(crate) fn populate(table: &'static [GitExtCommand]) -> (Registry, Option<Error>) {
    let mut registry = Registry::new();
    for command in table {
        if let Err(e) = registry.register(command.name, command, command.id) {
            return (registry, Some(e));
        }
    }
    (registry, None)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{populate, Registry};
    use crate::{
        cmd::{CommandCategory, ExecContext, GitExtCommand},
        host::Host,
    };

    fn noop_make() -> clap::Command {
        clap::Command::new("noop")
    }

    fn noop_run(_ctx: &ExecContext) -> Result<()> {
        Ok(())
    }

    fn noop_enabled(_host: &dyn Host) -> bool {
        true
    }

    const fn entry(name: &'static str, cli: &'static str, id: u32) -> GitExtCommand {
        GitExtCommand {
            name,
            cli,
            id,
            category: CommandCategory::Tools,
            run_for_selection: false,
            make: noop_make,
            run: noop_run,
            enabled: noop_enabled,
        }
    }

    static TABLE: &[GitExtCommand] = &[
        entry("Commit", "commit", 0x106),
        entry("Pull", "pull", 0x107),
        entry("Push", "push", 0x108),
    ];

    #[test]
    fn registered_entries_are_found_by_id_and_name() {
        let (registry, error) = populate(TABLE);
        assert!(error.is_none());
        assert_eq!(registry.commands().count(), TABLE.len());
        for command in TABLE {
            let by_id = registry.lookup_by_id(command.id).expect("id registered");
            let by_name = registry.lookup_by_name(command.name).expect("name registered");
            assert!(std::ptr::eq(by_id, command));
            assert!(std::ptr::eq(by_name, command));
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        let (registry, _) = populate(TABLE);
        assert!(registry.lookup_by_id(0x999).is_none());
        assert!(registry.lookup_by_name("Rebase").is_none());
    }

    #[test]
    fn duplicate_id_last_write_wins() {
        static FIRST: GitExtCommand = entry("First", "first", 0x200);
        static SECOND: GitExtCommand = entry("Second", "second", 0x200);
        let mut registry = Registry::new();
        registry.register(FIRST.name, &FIRST, FIRST.id).unwrap();
        registry.register(SECOND.name, &SECOND, SECOND.id).unwrap();
        let found = registry.lookup_by_id(0x200).unwrap();
        assert!(std::ptr::eq(found, &SECOND));
    }

    #[test]
    fn commands_iterate_in_id_order() {
        let (registry, _) = populate(TABLE);
        let ids: Vec<u32> = registry.commands().map(|command| command.id).collect();
        assert_eq!(ids, vec![0x106, 0x107, 0x108]);
    }

    #[test]
    fn populate_keeps_entries_before_a_bad_one() {
        static BAD_TABLE: &[GitExtCommand] = &[
            entry("Commit", "commit", 0x106),
            entry("Pull", "pull", 0x107),
            entry("Broken", "broken", 0),
            entry("Push", "push", 0x108),
            entry("Stash", "stash", 0x109),
        ];
        let (registry, error) = populate(BAD_TABLE);
        assert!(error.is_some());
        assert_eq!(registry.commands().count(), 2);
        assert!(registry.lookup_by_id(0x106).is_some());
        assert!(registry.lookup_by_id(0x107).is_some());
        assert!(registry.lookup_by_id(0x108).is_none());
        assert!(registry.lookup_by_id(0x109).is_none());
        assert!(registry.lookup_by_name("Stash").is_none());
    }
}
