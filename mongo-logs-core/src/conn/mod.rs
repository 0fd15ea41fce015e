//! Server connection: target resolution, client setup and profiling control.

mod profiling;
mod target;


pub use profiling::{ProfilingError, ProfilingLevel, profile_command, set_profiling_level};
pub use target::{Target, normalize_url};

use mongodb::sync::{Client, Database};
use tracing::info;

pub fn connect(target: &Target) -> mongodb::error::Result<Database> {
    let client = Client::with_uri_str(&target.url)?;
    info!(database = %target.database, "client ready");
    Ok(client.database(&target.database))
}
