//! Profile log rendering
//!
//! Reads operation documents from a database's `system.profile` collection
//! and prints them for a human.
//!
//! There are two ways to view them:
//! - **Pretty mode**: every operation becomes two lines, the request (who ran
//!   what against which collection) followed by the result (how long it took,
//!   how big the reply was, how many documents it touched)
//! - **Raw mode**: the profiler documents as-is, pretty-printed JSON, for
//!   working out what the server actually recorded
//!
//! The overall data processing architecture is:
//!
//! system.profile (tailable cursor)
//! ProfileTail
//! parse_entry
//! LogEntry
//! RecordFormatter
//! Record
//! stdout
//!

mod error;
mod raw;
mod render;
mod run;

#[cfg(test)]
mod tests;

pub use error::{FormatError, TailError};
pub use raw::dump_raw;
pub use render::{Record, RecordFormatter};
pub use run::{run_logs, tail};
