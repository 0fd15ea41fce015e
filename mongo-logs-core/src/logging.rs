use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize operator diagnostics on stderr.
///
/// stdout carries the rendered profile records, so the subscriber never
/// writes there:
/// - Uses environment variables for log level filtering (defaults to "info" if not set)
/// - Compact human-readable lines when stderr is a terminal
/// - JSON with flattened event fields otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}

/// How profile entries are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Profiler documents as pretty-printed JSON.
    Raw,
    /// Two formatted lines per operation.
    Pretty,
}

impl LogMode {
    pub fn from_flags(raw: bool) -> Self {
        if raw { LogMode::Raw } else { LogMode::Pretty }
    }
}
