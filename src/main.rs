//! ledit - a line-oriented text editor
//! Main entry point

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use ledit::constants::errors::NEW_FILE;
use ledit::constants::logging::DEFAULT_LOG_FILE;
use ledit::constants::ui::MSG_NEW_FILE;
use ledit::document::Document;
use ledit::error::{EditError, ErrorManager, ErrorType};
use ledit::interpreter::CommandInterpreter;
use ledit::logging::{self, LogConfig};
use ledit::session::Session;
use ledit::settings::{create_settings_registry, EditorOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(bin_name = "edit")]
#[command(version)]
#[command(about = "Edit a text file one line at a time")]
struct CliArgs {
    /// File to load and save
    filename: PathBuf,

    /// Set an option, e.g. `--set ff=crlf` or `--set noatomic_save`
    #[arg(long = "set", value_name = "NAME=VALUE")]
    settings: Vec<String>,

    /// Log to a file for debugging (filter with LEDIT_LOG)
    #[arg(long, short = 'l')]
    enable_logging: bool,

    /// Log file used with --enable-logging
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

const COMMANDS_HELP: &str = "Commands: E (save and exit), Q (quit), I <n> (insert before line n), \
L [n [m]] (list), D [n [m]] (delete). Any other input is inserted as a line.";

/// Parse arguments with the command and settings reference appended to `--help`
fn parse_args() -> Result<CliArgs, clap::Error> {
    let after_help = format!(
        "{COMMANDS_HELP}\n\n{}",
        create_settings_registry().help_text()
    );
    let matches = CliArgs::command()
        .after_help(after_help)
        .try_get_matches()?;
    CliArgs::from_arg_matches(&matches)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let options = match parse_options(&args.settings) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("edit: {}", e.message);
            eprintln!("Usage: edit [OPTIONS] <FILENAME>");
            return ExitCode::from(1);
        }
    };

    match run(args, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("edit: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Apply every `--set` assignment in order
fn parse_options(assignments: &[String]) -> Result<EditorOptions, EditError> {
    let registry = create_settings_registry();
    let mut options = EditorOptions::default();
    for assignment in assignments {
        registry.apply_assignment(assignment, &mut options)?;
    }
    Ok(options)
}

fn run(args: CliArgs, options: EditorOptions) -> anyhow::Result<()> {
    let _log_guard = logging::init(&LogConfig {
        enabled: args.enable_logging,
        file: args.log_file.clone(),
    })
    .context("could not start logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut errors = ErrorManager::new();

    let mut document = match Document::open(&args.filename) {
        Ok(document) => {
            if document.is_new() {
                let notice = EditError::info(
                    ErrorType::Io,
                    NEW_FILE,
                    format!("{MSG_NEW_FILE}: {}", document.display_name()),
                );
                errors.handle(&notice, &mut out)?;
            }
            document
        }
        Err(err) => {
            errors.handle(&err, &mut out)?;
            Document::empty(&args.filename)
        }
    };
    document.set_options(options);
    out.flush()?;

    let interpreter = CommandInterpreter::new(document);
    let mut session = Session::new(interpreter, io::stdin().lock(), out);
    let reason = session.run().context("editing session failed")?;
    tracing::info!(?reason, "session ended");
    Ok(())
}
