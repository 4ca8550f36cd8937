//! Command-line configuration.

use clap::Parser;
use orgroster_core::default_log_level;
use std::io;
use std::path::PathBuf;

/// Interactive roster of departments, roles and employees
#[derive(Parser, Debug)]
#[command(name = "orgroster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file, created when missing
    #[arg(long, env = "ORGROSTER_DB", default_value = "orgroster.sqlite3")]
    pub database: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "ORGROSTER_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Directory for rolling log files [default: ./logs]
    #[arg(long, env = "ORGROSTER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Load the demo roster before starting when the database has no departments
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    /// Log directory as an absolute path, relative paths resolved against the
    /// working directory.
    pub fn resolved_log_dir(&self) -> io::Result<PathBuf> {
        let dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs"));
        if dir.is_absolute() {
            return Ok(dir);
        }
        Ok(std::env::current_dir()?.join(dir))
    }
}
