use crate::profile::duration::ProfileDuration;
use crate::profile::error::DecodeError;
use crate::profile::types::{Counters, LogEntry, Operation};
use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};

/// Decode one `system.profile` document.
///
/// Servers before 3.6 keep the operation document under `query` (and the
/// update document under `updateobj`). Newer servers keep it under `command`,
/// with `q`/`u` for updates and removes. Both layouts are accepted.
pub fn parse_entry(doc: &Document) -> Result<LogEntry, DecodeError> {
    let ts = parse_ts(doc)?;

    let duration = doc
        .get("millis")
        .ok_or_else(|| DecodeError::missing("profile", "millis"))
        .and_then(|v| ProfileDuration::try_from(v).map_err(DecodeError::from))?;

    Ok(LogEntry {
        ts,
        client: string_field(doc, "client"),
        user: string_field(doc, "user"),
        app_name: doc.get("appName").and_then(Bson::as_str).map(str::to_string),
        namespace: string_field(doc, "ns"),
        duration,
        size: counter(doc, "responseLength"),
        operation: parse_operation(doc)?,
        counters: Counters {
            returned: counter(doc, "nreturned"),
            matched: counter(doc, "nMatched"),
            modified: counter(doc, "nModified"),
            deleted: counter(doc, "ndeleted"),
        },
    })
}

fn parse_operation(doc: &Document) -> Result<Operation, DecodeError> {
    let op = match doc.get("op") {
        Some(Bson::String(op)) if !op.is_empty() => op.as_str(),
        Some(Bson::String(_)) | None => return Err(DecodeError::missing("profile", "op")),
        Some(_) => return Err(DecodeError::field_type("profile", "op", "string")),
    };

    let operation = match op {
        "query" => {
            let op_doc = op_document(doc);
            Operation::Query {
                collection: target(op_doc, "query", "find")?,
                filter: op_doc.and_then(|s| s.get("filter")).cloned(),
            }
        }
        "update" => Operation::Update {
            filter: doc.get("query").cloned().or_else(|| command_field(doc, "q")),
            update: doc
                .get("updateobj")
                .cloned()
                .or_else(|| command_field(doc, "u")),
        },
        "remove" => Operation::Remove {
            filter: doc.get("query").cloned().or_else(|| command_field(doc, "q")),
        },
        "insert" => {
            let op_doc = op_document(doc);
            Operation::Insert {
                collection: target(op_doc, "insert", "insert")?,
                documents: op_doc.and_then(|s| s.get("documents")).cloned(),
            }
        }
        "command" => Operation::Command {
            command: doc.get("command").cloned(),
        },
        other => Operation::Other {
            op: other.to_string(),
        },
    };

    Ok(operation)
}

fn parse_ts(doc: &Document) -> Result<DateTime<Utc>, DecodeError> {
    match doc.get("ts") {
        Some(Bson::DateTime(dt)) => {
            let millis = dt.timestamp_millis();
            DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or(DecodeError::TimestampOutOfRange { millis })
        }
        Some(_) => Err(DecodeError::field_type("profile", "ts", "datetime")),
        None => Err(DecodeError::missing("profile", "ts")),
    }
}

fn op_document(doc: &Document) -> Option<&Document> {
    doc.get("query")
        .and_then(Bson::as_document)
        .or_else(|| doc.get("command").and_then(Bson::as_document))
}

fn command_field(doc: &Document, key: &str) -> Option<Bson> {
    doc.get("command")
        .and_then(Bson::as_document)
        .and_then(|c| c.get(key))
        .cloned()
}

fn target(
    op_doc: Option<&Document>,
    op: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    match op_doc.and_then(|s| s.get(field)) {
        Some(Bson::String(name)) => Ok(name.clone()),
        Some(_) => Err(DecodeError::field_type(op, field, "string")),
        None => Err(DecodeError::missing(op, field)),
    }
}

fn string_field(doc: &Document, key: &str) -> String {
    doc.get(key)
        .and_then(Bson::as_str)
        .unwrap_or_default()
        .to_string()
}

// Counters are int32 on most servers but int64/double show up too.
fn counter(doc: &Document, key: &str) -> i64 {
    match doc.get(key) {
        Some(Bson::Int32(v)) => i64::from(*v),
        Some(Bson::Int64(v)) => *v,
        Some(Bson::Double(v)) => *v as i64,
        _ => 0,
    }
}
