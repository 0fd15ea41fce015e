//! Live tail of a database's `system.profile` collection.

mod filter;

#[cfg(test)]
mod tests;

pub use filter::{NS_PATTERN, OP_PATTERN, profile_filter};

use mongodb::bson::{DateTime, Document, doc};
use mongodb::options::CursorType;
use mongodb::sync::{Collection, Cursor, Database};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const PROFILE_COLLECTION: &str = "system.profile";

/// Something that can open a cursor over profiler documents matching a filter.
pub trait CursorSource {
    type Cursor: Iterator<Item = mongodb::error::Result<Document>>;

    fn open(&mut self, filter: Document) -> mongodb::error::Result<Self::Cursor>;
}

impl CursorSource for Collection<Document> {
    type Cursor = Cursor<Document>;

    fn open(&mut self, filter: Document) -> mongodb::error::Result<Self::Cursor> {
        self.find(filter)
            .cursor_type(CursorType::TailableAwait)
            .run()
    }
}

/// Blocking iterator over profiler documents in arrival order. Never ends on
/// its own: a tailable cursor dies when the capped collection is empty, so a
/// dead cursor is reopened after `reopen_delay`, resuming at the last `ts`
/// seen.
///
/// `ts` only has millisecond precision, so the reopened cursor starts at that
/// millisecond and the entries already yielded for it are skipped.
pub struct ProfileTail<S: CursorSource = Collection<Document>> {
    source: S,
    cursor: Option<S::Cursor>,
    last_ts: Option<DateTime>,
    seen_at_last_ts: usize,
    to_skip: usize,
    reopen_delay: Duration,
}

impl ProfileTail {
    pub fn new(db: &Database, reopen_delay: Duration) -> Self {
        Self::from_source(db.collection(PROFILE_COLLECTION), reopen_delay)
    }
}

impl<S: CursorSource> ProfileTail<S> {
    pub fn from_source(source: S, reopen_delay: Duration) -> Self {
        Self {
            source,
            cursor: None,
            last_ts: None,
            seen_at_last_ts: 0,
            to_skip: 0,
            reopen_delay,
        }
    }

    fn reopen(&mut self) -> mongodb::error::Result<()> {
        debug!(after = ?self.last_ts, "opening tailable cursor");
        let cursor = self.source.open(resume_filter(self.last_ts))?;
        self.cursor = Some(cursor);
        self.to_skip = self.seen_at_last_ts;
        Ok(())
    }

    fn record(&mut self, ts: Option<DateTime>) {
        let Some(ts) = ts else { return };
        if self.last_ts == Some(ts) {
            self.seen_at_last_ts += 1;
        } else {
            self.last_ts = Some(ts);
            self.seen_at_last_ts = 1;
        }
    }
}

impl<S: CursorSource> Iterator for ProfileTail<S> {
    type Item = mongodb::error::Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cursor.is_none() {
                if let Err(e) = self.reopen() {
                    return Some(Err(e));
                }
            }

            match self.cursor.as_mut()?.next() {
                Some(Ok(doc)) => {
                    let ts = doc.get_datetime("ts").ok().copied();
                    if self.to_skip > 0 && ts.is_some() && ts == self.last_ts {
                        self.to_skip -= 1;
                        continue;
                    }
                    self.to_skip = 0;
                    self.record(ts);
                    return Some(Ok(doc));
                }
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.cursor = None;
                    thread::sleep(self.reopen_delay);
                }
            }
        }
    }
}

/// The profile filter, narrowed to entries at or after `from`.
pub(crate) fn resume_filter(from: Option<DateTime>) -> Document {
    let mut filter = profile_filter();
    if let Some(ts) = from {
        filter.insert("ts", doc! { "$gte": ts });
    }
    filter
}
