// SPDX-License-Identifier: GPL-2.0-only

//! Terminal driver for the Git Extensions command table.
//!
//! The driver plays the host role: each subcommand sets up a [`TerminalHost`] and
//! feeds the matching stable identifier to the dispatcher, exactly as an IDE host
//! feeds identifiers from its menu callbacks.

mod argset;
mod cmd;
mod color;
mod dispatch;
mod gitex;
mod host;
mod output;
mod registry;

use std::{io::Write, process::ExitCode};

use anyhow::Result;
use clap::{Arg, ArgMatches};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{dispatch::Dispatcher, host::TerminalHost};

fn main() -> ExitCode {
    let matches = get_full_command().get_matches();
    let color_choice = color::get_color_choice(&matches);
    let (sub_name, sub_matches) = matches.subcommand().expect("subcommand is required");

    let host = TerminalHost::new(color_choice, argset::get_opt_path(sub_matches));
    let dispatcher = Dispatcher::new(&host);

    let result = match sub_name {
        "activate" => activate(&dispatcher, sub_matches),
        "commands" => list_commands(&dispatcher, sub_matches),
        name => match cmd::COMMANDS.iter().find(|command| command.cli == name) {
            Some(command) => dispatcher.on_activate(command.id),
            None => panic!("unhandled subcommand `{name}`"),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_message(color_choice, &e);
            ExitCode::from(2)
        }
    }
}

fn get_full_command() -> clap::Command {
    clap::Command::new("gitexc")
        .about("Run Git Extensions commands from the terminal")
        .version(version_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .max_term_width(88)
        .arg(color::color_arg())
        .subcommands(cmd::COMMANDS.iter().map(|command| (command.make)()))
        .subcommand(activate_command())
        .subcommand(commands_command())
}

fn version_string() -> String {
    match option_env!("GITEXC_BUILD_GIT_HASH") {
        Some(hash) => format!("{} ({hash})", clap::crate_version!()),
        None => clap::crate_version!().to_string(),
    }
}

fn activate_command() -> clap::Command {
    clap::Command::new("activate")
        .about("Dispatch a command by identifier or command-table name")
        .long_about(
            "Dispatch a command the way an IDE host does: by the stable numeric \
             identifier from the command table. Identifiers may be decimal or \
             0x-prefixed hexadecimal; an unknown identifier is silently ignored.\n\
             \n\
             A command-table name such as `ShowFileHistory` may be given instead; \
             unknown names are an error.",
        )
        .arg(
            Arg::new("command")
                .help("Numeric identifier or command-table name")
                .value_name("id-or-name")
                .required(true),
        )
        .arg(argset::path_arg())
}

fn activate(dispatcher: &Dispatcher, matches: &ArgMatches) -> Result<()> {
    let token = matches
        .get_one::<String>("command")
        .expect("required argument");
    match argset::parse_command_id(token) {
        Ok(id) => dispatcher.on_activate(id),
        Err(_) => match dispatcher.registry().lookup_by_name(token) {
            Some(command) => dispatcher.on_activate(command.id),
            None => Err(anyhow::anyhow!("unknown command name `{token}`")),
        },
    }
}

fn commands_command() -> clap::Command {
    clap::Command::new("commands")
        .about("List the command table")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the command table as JSON")
                .action(clap::ArgAction::SetTrue),
        )
}

#[derive(serde::Serialize)]
struct CommandInfo<'a> {
    name: &'a str,
    command: &'a str,
    id: u32,
    category: &'a str,
    enabled: bool,
}

fn list_commands(dispatcher: &Dispatcher, matches: &ArgMatches) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if matches.get_flag("json") {
        let table: Vec<CommandInfo> = dispatcher
            .registry()
            .commands()
            .map(|command| CommandInfo {
                name: command.name,
                command: command.cli,
                id: command.id,
                category: command.category.as_str(),
                enabled: dispatcher.is_enabled(command.id),
            })
            .collect();
        serde_json::to_writer_pretty(&mut stdout, &table)?;
        writeln!(stdout)?;
    } else {
        for command in dispatcher.registry().commands() {
            let about = (command.make)()
                .get_about()
                .map(|about| about.to_string())
                .unwrap_or_default();
            writeln!(stdout, "{:<16} {:#05x}  {about}", command.cli, command.id)?;
        }
    }
    Ok(())
}

fn print_error_message(color_choice: ColorChoice, err: &anyhow::Error) {
    let mut stderr = StandardStream::stderr(color_choice);
    let mut color = ColorSpec::new();
    let _ = stderr.set_color(color.set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error: ");
    let _ = stderr.set_color(color.set_fg(None).set_bold(false));

    let message = format!("{err:#}");
    let parts: Vec<&str> = message.split('`').collect();
    let balanced = parts.len() % 2 == 1;
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 && balanced {
            let _ = stderr.set_color(color.set_fg(Some(Color::Yellow)));
            let _ = write!(stderr, "`{part}`");
            let _ = stderr.set_color(color.set_fg(None));
        } else if i % 2 == 1 {
            let _ = write!(stderr, "`{part}");
        } else {
            let _ = write!(stderr, "{part}");
        }
    }
    let _ = writeln!(stderr);
}
