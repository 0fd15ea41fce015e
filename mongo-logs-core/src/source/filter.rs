use mongodb::bson::{Document, doc};

/// Skips cursor continuations and kills.
pub const OP_PATTERN: &str = "^((?!(getmore|killcursors)).)";

/// Skips admin commands plus system and temporary collections.
pub const NS_PATTERN: &str = r"^((?!(admin\.\$cmd|\.system|\.tmp\.)).)*$";

/// Server-side filter for `system.profile`. Also drops the profiler's own
/// `profile` command and index listings done by tooling.
pub fn profile_filter() -> Document {
    doc! {
        "op": { "$regex": OP_PATTERN },
        "ns": { "$regex": NS_PATTERN },
        "command.profile": { "$exists": false },
        "command.listIndexes": { "$exists": false },
    }
}
