// SPDX-License-Identifier: GPL-2.0-only

//! [`clap::Arg`] definitions common to several commands.

use std::path::PathBuf;

use clap::{Arg, ArgMatches};

/// The optional path argument used by file-scoped commands.
///
/// When given, it plays the role of the host's active document.
pub(crate) fn path_arg() -> Arg {
    Arg::new("path")
        .help("File to run the operation on")
        .value_name("path")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(clap::ValueHint::FilePath)
}

/// Get the `path` argument from commands that may or may not define it.
pub(crate) fn get_opt_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .try_get_one::<PathBuf>("path")
        .ok()
        .flatten()
        .cloned()
}

/// Parse a command identifier given as decimal or 0x-prefixed hexadecimal.
pub(crate) fn parse_command_id(s: &str) -> anyhow::Result<u32> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|_| anyhow::anyhow!("'{s}' is not a command identifier"))
}

#[cfg(test)]
mod tests {
    use super::parse_command_id;

    #[test]
    fn command_ids_parse_in_both_bases() {
        assert_eq!(parse_command_id("262").unwrap(), 262);
        assert_eq!(parse_command_id("0x106").unwrap(), 0x106);
        assert_eq!(parse_command_id("0X106").unwrap(), 0x106);
        assert!(parse_command_id("Commit").is_err());
        assert!(parse_command_id("-1").is_err());
        assert!(parse_command_id("0x").is_err());
    }
}
