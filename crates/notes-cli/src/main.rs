//! Notes CLI - a password-protected, encrypted note store
//!
//! This is the command-line interface for notes. It loads the store,
//! applies one command, and writes the store back.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use notes_core::{NotesError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{maintenance, misc, notes};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let err = classify_error(e);
        print_error(&ctx.ui(), err.message(), err.hint());
        std::process::exit(err.exit_code());
    }
}

/// Map an error from a handler to a typed CLI error with an exit code.
fn classify_error(err: anyhow::Error) -> CliError {
    let err = match err.downcast::<CliError>() {
        Ok(cli_err) => return cli_err,
        Err(other) => other,
    };
    match err.downcast::<NotesError>() {
        Ok(notes_err) => notes_err.into(),
        Err(other) => CliError::General {
            message: format!("{:#}", other),
            hint: None,
        },
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::List(args)) => {
            notes::handle_list(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            notes::handle_add(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            notes::handle_delete(ctx, args)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Backup(args)) => {
            maintenance::handle_backup(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Notes v{}", VERSION);
            println!("\nUsage:");
            println!("  notes list      list all notes");
            println!("  notes add       add a new note");
            println!("  notes delete    delete a note");
            println!("\nRun `notes --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_classify_notes_error() {
        let err = classify_error(anyhow::Error::new(NotesError::AuthenticationFailed));
        assert_eq!(err.exit_code(), exit_codes::AUTH_FAILED);
    }

    #[test]
    fn test_classify_cli_error() {
        let err = classify_error(CliError::invalid_input("bad").into());
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_classify_other_error() {
        let err = classify_error(anyhow::anyhow!("something else"));
        assert_eq!(err.exit_code(), exit_codes::GENERAL);
        assert_eq!(err.message(), "something else");
    }
}
