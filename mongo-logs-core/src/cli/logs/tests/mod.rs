mod raw_tests;
mod run_tests;

use mongodb::bson::{DateTime, Document, doc};

/// A profiler document with the fields every operation carries.
pub(super) fn profile_doc(op: &str) -> Document {
    doc! {
        "op": op,
        "ns": "accounts.users",
        "ts": DateTime::from_millis(1_714_564_800_000),
        "client": "10.0.0.7",
        "user": "",
        "millis": 1500,
        "responseLength": 256,
    }
}
