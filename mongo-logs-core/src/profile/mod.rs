//! Profiler entries: the typed view of `system.profile` documents.

mod duration;
mod error;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use duration::ProfileDuration;
pub use error::{DecodeError, DurationError};
pub use parse::parse_entry;
pub use types::{Counters, LogEntry, Operation};
