use crate::cli::logs::error::FormatError;
use crate::profile::{LogEntry, Operation, parse_entry};
use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::Value;
use std::io::{self, Write};

/// Two-line text rendering of one profiler entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub request: String,
    pub result: String,
}

impl Record {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.request)?;
        writeln!(out, "{}", self.result)
    }
}

/// Renders entries for one database. Update and remove namespaces are shown
/// relative to it.
#[derive(Debug, Clone)]
pub struct RecordFormatter {
    db_prefix: String,
}

impl RecordFormatter {
    pub fn new(database: &str) -> Self {
        Self {
            db_prefix: format!("{database}."),
        }
    }

    pub fn format_document(&self, doc: &Document) -> Result<Record, FormatError> {
        let entry = parse_entry(doc)?;
        self.format(&entry)
    }

    pub fn format(&self, entry: &LogEntry) -> Result<Record, FormatError> {
        let prefix = prefix(entry);

        let mut request = prefix.clone();
        request.push_str(&entry.operation.name().to_uppercase());

        let mut result = prefix;
        result.push_str(&format!(
            "result: time:{} size:{}",
            entry.duration, entry.size
        ));

        let c = &entry.counters;
        match &entry.operation {
            Operation::Query { collection, filter } => {
                request.push_str(&format!(" {collection} {}", to_json(filter.as_ref())?));
                result.push_str(&format!(" returned:{}", c.returned));
            }
            Operation::Update { filter, update } => {
                request.push_str(&format!(
                    " {} {} {}",
                    self.collection(&entry.namespace),
                    to_json(filter.as_ref())?,
                    to_json(update.as_ref())?
                ));
                result.push_str(&format!(" matched:{} modified:{}", c.matched, c.modified));
            }
            Operation::Remove { filter } => {
                let filter = match filter {
                    Some(f) => to_json(Some(f))?,
                    None => "{}".to_string(),
                };
                request.push_str(&format!(" {} {filter}", self.collection(&entry.namespace)));
                result.push_str(&format!(" deleted:{}", c.deleted));
            }
            Operation::Insert {
                collection,
                documents,
            } => {
                request.push_str(&format!(" {collection} {}", to_json(documents.as_ref())?));
            }
            Operation::Command { command } => {
                request.push(' ');
                request.push_str(&to_json(command.as_ref())?);
            }
            Operation::Other { .. } => {}
        }

        Ok(Record { request, result })
    }

    fn collection<'a>(&self, namespace: &'a str) -> &'a str {
        namespace
            .strip_prefix(self.db_prefix.as_str())
            .unwrap_or(namespace)
    }
}

fn prefix(entry: &LogEntry) -> String {
    let user = if entry.user.is_empty() {
        "\"\""
    } else {
        entry.user.as_str()
    };

    format!(
        "{} {} {} ",
        entry.ts.to_rfc3339_opts(SecondsFormat::Secs, true),
        user,
        entry.client
    )
}

/// Compact relaxed extended JSON. Absent values render as `null`.
fn to_json(value: Option<&Bson>) -> Result<String, serde_json::Error> {
    let json = value
        .cloned()
        .map(Bson::into_relaxed_extjson)
        .unwrap_or(Value::Null);
    serde_json::to_string(&json)
}
