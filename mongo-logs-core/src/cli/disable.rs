use crate::conf::ProfilingConfig;
use crate::conn::{ProfilingLevel, set_profiling_level};
use anyhow::{Context, Result};
use mongodb::sync::Database;

/// Switch profiling back off and report it on stderr.
pub fn run(db: &Database, config: &ProfilingConfig) -> Result<()> {
    set_profiling_level(db, ProfilingLevel::Off, config)
        .with_context(|| format!("could not disable logging on database {}", db.name()))?;

    eprintln!("Disabled system logging on database {}. Quitting", db.name());

    Ok(())
}
