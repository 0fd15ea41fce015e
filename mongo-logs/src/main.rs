use anyhow::{Context, Result};
use clap::Parser;
use mongo_logs_core::cli::{Cli, disable, logs};
use mongo_logs_core::conf::load_config;
use mongo_logs_core::conn::{Target, connect};
use mongo_logs_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let target = Target::parse(&cli.target)?;

    let db = connect(&target)
        .with_context(|| format!("failed to connect to database {}", target.database))?;

    if cli.disable {
        return disable::run(&db, &config.profiling);
    }

    logs::run_logs(&db, cli.log_mode(), &config)
}
