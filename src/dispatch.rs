// SPDX-License-Identifier: GPL-2.0-only

//! Activation dispatch.
//!
//! The [`Dispatcher`] is the single entry point the host talks to: it owns the
//! registry and the lazily acquired output pane, and turns a numeric activation into
//! a command invocation.

use std::cell::OnceCell;

use anyhow::Result;

use crate::{
    cmd::{self, CommandId, ExecContext},
    host::Host,
    output::{self, OutputPane},
    registry::{self, Registry},
};

/// Name of the diagnostic pane, shared with the other Git Extensions integrations.
pub(crate) const PANE_NAME: &str = "GitExtensions";

pub(crate) struct Dispatcher<'h> {
    host: &'h dyn Host,
    registry: Registry,
    pane: OnceCell<Option<OutputPane>>,
}

impl<'h> Dispatcher<'h> {
    /// Build a dispatcher over the builtin command table.
    ///
    /// A registration failure keeps the partially built registry and is reported to
    /// the pane when one is available; it never escapes.
    pub(crate) fn new(host: &'h dyn Host) -> Self {
        let (registry, error) = registry::populate(cmd::COMMANDS);
        let dispatcher = Self::with_registry(host, registry);
        if let Some(error) = error {
            if let Some(pane) = dispatcher.output_pane() {
                pane.write_line(&format!("error adding commands: {error}"));
            }
        }
        dispatcher
    }

    pub(crate) fn with_registry(host: &'h dyn Host, registry: Registry) -> Self {
        Self {
            host,
            registry,
            pane: OnceCell::new(),
        }
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The diagnostic pane, acquired on first use.
    ///
    /// The outcome is cached for the life of the dispatcher, so a failed acquisition
    /// leaves diagnostics disabled rather than retrying on every access.
    pub(crate) fn output_pane(&self) -> Option<&OutputPane> {
        self.pane
            .get_or_init(|| output::acquire(self.host, PANE_NAME))
            .as_ref()
    }

    /// Handle an activation for the command identified by `id`.
    ///
    /// An unknown id is ignored. Errors from the command itself are not caught here;
    /// the caller decides how command failures surface.
    pub(crate) fn on_activate(&self, id: CommandId) -> Result<()> {
        let Some(command) = self.registry.lookup_by_id(id) else {
            return Ok(());
        };
        let ctx = ExecContext {
            host: self.host,
            pane: self.output_pane(),
            for_selection: command.run_for_selection,
        };
        (command.run)(&ctx)
    }

    /// Whether the command identified by `id` is currently available in the host.
    pub(crate) fn is_enabled(&self, id: CommandId) -> bool {
        self.registry
            .lookup_by_id(id)
            .is_some_and(|command| (command.enabled)(self.host))
    }
}
