use crate::cli::logs::error::TailError;
use crate::conf::DebugConfig;
use mongodb::bson::{Bson, Document};
use std::io::Write;
use tracing::info;

/// Debug mode: pretty-print matching profiler documents untouched, each
/// followed by a blank line. Stops after `filter.limit` documents if set.
pub fn dump_raw<S, E, W>(source: S, filter: &DebugConfig, out: &mut W) -> Result<u64, TailError>
where
    S: IntoIterator<Item = Result<Document, E>>,
    TailError: From<E>,
    W: Write,
{
    let mut dumped = 0;

    for doc in source {
        let doc = doc?;
        if !matches(filter, &doc) {
            continue;
        }

        let json = serde_json::to_string_pretty(&Bson::Document(doc).into_relaxed_extjson())?;
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n\n")?;
        out.flush()?;

        dumped += 1;
        if filter.limit.is_some_and(|limit| dumped >= limit) {
            info!(dumped, "debug dump limit reached");
            break;
        }
    }

    Ok(dumped)
}

fn matches(filter: &DebugConfig, doc: &Document) -> bool {
    let field_is = |key: &str, want: &Option<String>| match want {
        Some(want) => doc.get(key).and_then(Bson::as_str) == Some(want.as_str()),
        None => true,
    };

    field_is("op", &filter.op) && field_is("ns", &filter.namespace)
}
