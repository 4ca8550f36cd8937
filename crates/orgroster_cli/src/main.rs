//! `orgroster` entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the roster database.
//! - Hand the terminal to the menu session and map its end to an exit code.

mod config;

use clap::Parser;
use config::Cli;
use log::{error, info};
use orgroster_core::db::{open_db, seed::apply_demo_seed};
use orgroster_core::{init_logging, LinePrompter, MenuSession, OrgService, SessionOutcome};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = match cli.resolved_log_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("orgroster: cannot resolve log directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    // The menu still works without file logs.
    if let Err(err) = init_logging(&cli.log_level, &log_dir.to_string_lossy()) {
        eprintln!("orgroster: logging disabled: {err}");
    }

    let mut conn = match open_db(&cli.database) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=cli_start module=cli status=error error_code=db_open_failed error={err}");
            eprintln!(
                "orgroster: cannot open database `{}`: {err}",
                cli.database.display()
            );
            return ExitCode::FAILURE;
        }
    };

    if cli.seed {
        match apply_demo_seed(&mut conn) {
            Ok(true) => println!("Demo roster loaded."),
            Ok(false) => println!("Database already has departments; demo roster skipped."),
            Err(err) => {
                error!("event=cli_seed module=cli status=error error={err}");
                eprintln!("orgroster: seeding failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    info!(
        "event=cli_start module=cli status=ok database={}",
        cli.database.display()
    );

    let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    // Prompts and results share the stdout handle so they stay in order.
    let mut session = MenuSession::new(OrgService::sqlite(&conn), prompter, io::stdout());

    match session.run() {
        Ok(SessionOutcome::Exited) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_exit module=cli status=error error={err}");
            eprintln!("orgroster: session ended: {err}");
            ExitCode::FAILURE
        }
    }
}
