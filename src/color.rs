// SPDX-License-Identifier: GPL-2.0-only

use clap::{Arg, ArgMatches};
use termcolor::ColorChoice;

pub(crate) fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .help("When to colorize output: auto, always, ansi, never")
        .long_help(
            "Specify WHEN to colorize the output.\n\
             \n\
             'auto' (the default) enables colored output only when \
             outputting to a terminal or TTY.\n\
             \n\
             'always' and 'never' unconditionally enable/disable \
             colored output, respectively.\n\
             \n\
             'ansi' forces color to be output using ANSI escape sequences, \
             even in a Windows console.",
        )
        .hide_default_value(true)
        .hide_possible_values(true)
        .value_name("when")
        .value_parser(["auto", "always", "ansi", "never"])
        .default_value("auto")
        .overrides_with("color")
        .global(true)
}

pub(crate) fn get_color_choice(matches: &ArgMatches) -> ColorChoice {
    match matches
        .get_one::<String>("color")
        .map(|s| s.as_str())
        .unwrap_or("auto")
    {
        "always" => ColorChoice::Always,
        "ansi" => ColorChoice::AlwaysAnsi,
        "auto" => {
            if atty::is(atty::Stream::Stderr) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
        _ => ColorChoice::Never,
    }
}
