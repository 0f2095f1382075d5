//! # CloudPoker CLI Library
//!
//! Command-line front end for the cloudpoker engine: play sessions, inspect
//! single deals, manage game codes and view the high-score table.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand and returns the exit
//! code. Output streams are passed in so the whole surface can be driven from
//! tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cloudpoker", "play", "--seed", "42"];
//! let code = cloudpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a five-round session
//! - `deal`: Deal and classify one hand
//! - `code validate`: Check the shape of a game code
//! - `code load`: Import a game code into the rankings
//! - `rankings`: Show the high-score table
//! - `hands`: List every hand kind with its score
//! - `cfg`: Display resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CloudPokerCli, CodeAction, Commands};
use commands::{
    PlayOptions, handle_cfg_command, handle_code_load_command, handle_code_validate_command,
    handle_deal_command, handle_hands_command, handle_play_command, handle_rankings_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "code", "rankings", "hands", "cfg"];

/// Parses `args` and runs the selected subcommand against real stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// in the middle of a session.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cloudpoker", "deal", "--seed", "42"];
/// let code = cloudpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] with the interactive input supplied by the caller.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CloudPokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            catalog,
            rankings,
            log,
            auto,
            no_save,
        } => {
            let opts = PlayOptions {
                seed,
                catalog,
                rankings,
                log,
                auto,
                no_save,
            };
            handle_play_command(opts, out, err, stdin)
        }
        Commands::Deal { seed, catalog } => handle_deal_command(seed, catalog, out),
        Commands::Code { action } => match action {
            CodeAction::Validate { code } => handle_code_validate_command(&code, out),
            CodeAction::Load { code, rankings } => {
                handle_code_load_command(&code, rankings, out, err)
            }
        },
        Commands::Rankings {
            rankings,
            top,
            detail,
        } => handle_rankings_command(rankings, usize::from(top), detail, out),
        Commands::Hands => handle_hands_command(out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let code = exit_code::for_error(&e);
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            code
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut write_all = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "CloudPoker CLI")?;
        writeln!(err, "Usage: cloudpoker <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: cloudpoker --help")
    };
    let _ = write_all();
    exit_code::ERROR
}
