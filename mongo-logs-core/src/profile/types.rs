use crate::profile::duration::ProfileDuration;
use chrono::{DateTime, Utc};
use mongodb::bson::Bson;

/// One captured database operation, projected from a `system.profile` document.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub ts: DateTime<Utc>,
    pub client: String,
    /// Empty when the operation was unauthenticated.
    pub user: String,
    pub app_name: Option<String>,
    /// `<db>.<collection>`
    pub namespace: String,
    pub duration: ProfileDuration,
    /// Response size in bytes.
    pub size: i64,
    pub operation: Operation,
    pub counters: Counters,
}

/// Operation kind together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Query {
        collection: String,
        filter: Option<Bson>,
    },
    Update {
        filter: Option<Bson>,
        update: Option<Bson>,
    },
    Remove {
        filter: Option<Bson>,
    },
    Insert {
        collection: String,
        documents: Option<Bson>,
    },
    Command {
        command: Option<Bson>,
    },
    Other {
        op: String,
    },
}

impl Operation {
    /// The profiler's `op` value.
    pub fn name(&self) -> &str {
        match self {
            Operation::Query { .. } => "query",
            Operation::Update { .. } => "update",
            Operation::Remove { .. } => "remove",
            Operation::Insert { .. } => "insert",
            Operation::Command { .. } => "command",
            Operation::Other { op } => op,
        }
    }
}

/// Result counters. Which ones are meaningful depends on the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub returned: i64,
    pub matched: i64,
    pub modified: i64,
    pub deleted: i64,
}
