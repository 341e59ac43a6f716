// SPDX-License-Identifier: GPL-2.0-only

//! Host abstraction.
//!
//! Commands run inside some host application: the original integration target is an
//! IDE, the driver binary in this crate is a terminal. The [`Host`] trait reduces the
//! host to the few capabilities commands actually consume: the focused document, the
//! selected item, and a facility for named output panes.

use std::path::PathBuf;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream};

use crate::output::OutputPane;

pub(crate) trait Host {
    /// Path of the document the host currently has focused, if any.
    fn active_document(&self) -> Option<PathBuf>;

    /// Path of the item currently selected in the host, if any.
    ///
    /// Hosts without a selection concept fall back to the active document.
    fn selected_file(&self) -> Option<PathBuf> {
        self.active_document()
    }

    /// Find an already-existing output pane by name.
    fn find_output_pane(&self, name: &str) -> Option<OutputPane>;

    /// Create a new named output pane.
    fn create_output_pane(&self, name: &str) -> Result<OutputPane>;
}

/// Host implementation for running commands from a shell.
///
/// The "active document" is whatever path was given on the command line. Output panes
/// are streams to stderr; the terminal keeps no pane inventory, so there is never an
/// existing pane to find.
pub(crate) struct TerminalHost {
    active: Option<PathBuf>,
    color_choice: ColorChoice,
}

impl TerminalHost {
    pub(crate) fn new(color_choice: ColorChoice, active: Option<PathBuf>) -> Self {
        Self {
            active,
            color_choice,
        }
    }
}

impl Host for TerminalHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn find_output_pane(&self, _name: &str) -> Option<OutputPane> {
        None
    }

    fn create_output_pane(&self, name: &str) -> Result<OutputPane> {
        Ok(OutputPane::new(
            name,
            Box::new(StandardStream::stderr(self.color_choice)),
        ))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        cell::{Cell, RefCell},
        io::Write,
        path::PathBuf,
        rc::Rc,
    };

    use anyhow::{anyhow, Result};
    use termcolor::{ColorSpec, WriteColor};

    use super::Host;
    use crate::output::OutputPane;

    /// Colorless [`WriteColor`] stream over a shared byte buffer.
    #[derive(Clone)]
    pub(crate) struct SharedBuf(pub(crate) Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for SharedBuf {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &ColorSpec) -> std::io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Scriptable host for exercising dispatch, pane acquisition, and enablement.
    #[derive(Default)]
    pub(crate) struct MockHost {
        pub(crate) active: Option<PathBuf>,
        pub(crate) selected: Option<PathBuf>,
        pub(crate) existing_panes: Vec<String>,
        pub(crate) fail_pane_creation: bool,
        pub(crate) finds: Cell<usize>,
        pub(crate) creates: Cell<usize>,
        pub(crate) buf: Rc<RefCell<Vec<u8>>>,
    }

    impl MockHost {
        pub(crate) fn pane_output(&self) -> String {
            String::from_utf8_lossy(&self.buf.borrow()).into_owned()
        }

        fn pane(&self, name: &str) -> OutputPane {
            OutputPane::new(name, Box::new(SharedBuf(self.buf.clone())))
        }
    }

    impl Host for MockHost {
        fn active_document(&self) -> Option<PathBuf> {
            self.active.clone()
        }

        fn selected_file(&self) -> Option<PathBuf> {
            self.selected.clone().or_else(|| self.active.clone())
        }

        fn find_output_pane(&self, name: &str) -> Option<OutputPane> {
            self.finds.set(self.finds.get() + 1);
            self.existing_panes
                .iter()
                .any(|existing| existing == name)
                .then(|| self.pane(name))
        }

        fn create_output_pane(&self, name: &str) -> Result<OutputPane> {
            self.creates.set(self.creates.get() + 1);
            if self.fail_pane_creation {
                Err(anyhow!("output window unavailable"))
            } else {
                Ok(self.pane(name))
            }
        }
    }
}
