use crate::logging::LogMode;
use clap::{ArgAction, Parser};
use std::convert::Infallible;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mongo-logs",
    version,
    about = "Enable verbose Mongo logs on a database, then tail them",
    long_about = "Enable verbose Mongo logs on the provided database, and then tail the logs.\n\n\
                  Targets are parsed the way the mongo shell parses them: \
                  `mongo-logs accounts` connects to the accounts database on localhost."
)]
pub struct Cli {
    /// Database name, host[:port]/database, or mongodb:// URL
    pub target: String,

    /// Disable Mongo query logging and exit
    #[arg(long)]
    pub disable: bool,

    /// Dump raw profiler documents as JSON instead of formatted lines
    #[arg(long, env = "DEBUG", action = ArgAction::SetTrue, value_parser = debug_enabled)]
    pub raw: bool,

    /// Path to an optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn log_mode(&self) -> LogMode {
        LogMode::from_flags(self.raw)
    }
}

/// Only `DEBUG=true` turns on the raw dump. Any other value leaves it off.
pub(crate) fn debug_enabled(value: &str) -> Result<bool, Infallible> {
    Ok(value == "true")
}
