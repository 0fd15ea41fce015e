use crate::conf::ProfilingConfig;
use mongodb::bson::{Bson, Document, doc};
use mongodb::sync::Database;
use thiserror::Error;
use tracing::info;

/// Server profiling levels, as taken by the `profile` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingLevel {
    Off = 0,
    Slow = 1,
    All = 2,
}

#[derive(Debug, Error)]
pub enum ProfilingError {
    #[error("server rejected profile level {level:?} on database {database}")]
    Rejected {
        level: ProfilingLevel,
        database: String,
    },

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// The command behind `db.setProfilingLevel()`. The shell defaults `slowms` to
/// 100; here it comes from config so level 2 records everything.
pub fn profile_command(level: ProfilingLevel, config: &ProfilingConfig) -> Document {
    let slowms = match level {
        ProfilingLevel::Off => config.reset_slowms,
        ProfilingLevel::Slow | ProfilingLevel::All => config.slowms,
    };

    let level = level as i32;
    doc! { "profile": level, "slowms": slowms }
}

pub fn set_profiling_level(
    db: &Database,
    level: ProfilingLevel,
    config: &ProfilingConfig,
) -> Result<(), ProfilingError> {
    let reply = db.run_command(profile_command(level, config)).run()?;

    if !reply_ok(&reply) {
        return Err(ProfilingError::Rejected {
            level,
            database: db.name().to_string(),
        });
    }

    info!(database = db.name(), ?level, "profiling level set");
    Ok(())
}

pub(crate) fn reply_ok(reply: &Document) -> bool {
    match reply.get("ok") {
        Some(Bson::Double(v)) => *v == 1.0,
        Some(Bson::Int32(v)) => *v == 1,
        Some(Bson::Int64(v)) => *v == 1,
        Some(Bson::Boolean(v)) => *v,
        _ => false,
    }
}
