// SPDX-License-Identifier: GPL-2.0-only

//! Named output panes.
//!
//! A pane is the channel for human-readable diagnostics. Acquisition is best-effort:
//! when no pane can be obtained, callers carry `None` and diagnostics are dropped.

use std::{cell::RefCell, io::Write};

use termcolor::WriteColor;

use crate::host::Host;

/// A named diagnostic sink over a color-capable stream.
pub(crate) struct OutputPane {
    name: String,
    stream: RefCell<Box<dyn WriteColor>>,
}

impl OutputPane {
    pub(crate) fn new(name: &str, stream: Box<dyn WriteColor>) -> Self {
        Self {
            name: name.to_string(),
            stream: RefCell::new(stream),
        }
    }

    /// Write one diagnostic line. Stream errors are dropped; pane output must never
    /// become fatal.
    pub(crate) fn write_line(&self, line: &str) {
        let mut stream = self.stream.borrow_mut();
        let _ = writeln!(stream, "{line}");
        let _ = stream.flush();
    }
}

impl std::fmt::Debug for OutputPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputPane")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Obtain the pane with the given name from the host.
///
/// An existing pane is reused; otherwise a new one is created. Every failure mode,
/// including an empty name, yields `None`.
pub(crate) fn acquire(host: &dyn Host, name: &str) -> Option<OutputPane> {
    if name.is_empty() {
        return None;
    }
    if let Some(pane) = host.find_output_pane(name) {
        return Some(pane);
    }
    host.create_output_pane(name).ok()
}

#[cfg(test)]
mod tests {
    use super::acquire;
    use crate::host::testing::MockHost;

    #[test]
    fn acquire_reuses_existing_pane() {
        let host = MockHost {
            existing_panes: vec!["GitExtensions".to_string()],
            ..Default::default()
        };
        let pane = acquire(&host, "GitExtensions").expect("existing pane found");
        assert_eq!(pane.name, "GitExtensions");
        assert_eq!(host.finds.get(), 1);
        assert_eq!(host.creates.get(), 0);
    }

    #[test]
    fn acquire_creates_when_missing() {
        let host = MockHost::default();
        let pane = acquire(&host, "GitExtensions").expect("pane created");
        assert_eq!(pane.name, "GitExtensions");
        assert_eq!(host.creates.get(), 1);
    }

    #[test]
    fn acquire_swallows_creation_failure() {
        let host = MockHost {
            fail_pane_creation: true,
            ..Default::default()
        };
        assert!(acquire(&host, "GitExtensions").is_none());
    }

    #[test]
    fn acquire_rejects_empty_name() {
        let host = MockHost::default();
        assert!(acquire(&host, "").is_none());
        assert_eq!(host.finds.get(), 0);
        assert_eq!(host.creates.get(), 0);
    }

    #[test]
    fn write_line_is_infallible() {
        let host = MockHost::default();
        let pane = acquire(&host, "GitExtensions").unwrap();
        pane.write_line("pulled 3 commits");
        pane.write_line("");
        assert_eq!(host.pane_output(), "pulled 3 commits\n\n");
    }
}
