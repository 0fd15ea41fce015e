use crate::cli::logs::error::TailError;
use crate::cli::logs::raw::dump_raw;
use crate::cli::logs::render::RecordFormatter;
use crate::conf::MongoLogsConfig;
use crate::conn::{ProfilingLevel, set_profiling_level};
use crate::logging::LogMode;
use crate::source::ProfileTail;
use anyhow::{Context, Result};
use mongodb::bson::Document;
use mongodb::sync::Database;
use std::io::{self, Write};
use tracing::{debug, info};

/// Turn on full profiling for `db` and tail its profile collection to stdout
/// until the process is killed or something fails.
pub fn run_logs(db: &Database, mode: LogMode, config: &MongoLogsConfig) -> Result<()> {
    set_profiling_level(db, ProfilingLevel::All, &config.profiling)
        .with_context(|| format!("could not enable verbose logging on database {}", db.name()))?;

    info!(database = db.name(), ?mode, "tailing system.profile");

    let source = ProfileTail::new(db, config.tail.reopen_delay());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        LogMode::Pretty => {
            tail(source, &RecordFormatter::new(db.name()), &mut out)?;
        }
        LogMode::Raw => {
            dump_raw(source, &config.debug, &mut out)?;
        }
    }

    Ok(())
}

/// Pull loop: fetch, format, write, flush. The first error ends the loop;
/// records already written stay written.
pub fn tail<S, E, W>(source: S, formatter: &RecordFormatter, out: &mut W) -> Result<u64, TailError>
where
    S: IntoIterator<Item = Result<Document, E>>,
    TailError: From<E>,
    W: Write,
{
    let mut written = 0;

    for doc in source {
        let record = formatter.format_document(&doc?)?;
        record.write_to(out)?;
        out.flush()?;
        written += 1;
    }

    debug!(written, "profile source ended");
    Ok(written)
}
