use super::profile_doc;
use crate::cli::logs::{FormatError, RecordFormatter, TailError, tail};
use mongodb::bson::{Document, doc};
use pretty_assertions::assert_eq;
use std::io::{self, Write};

fn ok(docs: Vec<Document>) -> Vec<Result<Document, mongodb::error::Error>> {
    docs.into_iter().map(Ok).collect()
}

fn ping() -> Document {
    let mut doc = profile_doc("command");
    doc.insert("command", doc! { "ping": 1 });
    doc
}

#[test]
fn writes_two_lines_per_entry() {
    // Arrange
    let mut out = Vec::new();

    // Act
    let written = tail(ok(vec![ping(), ping()]), &RecordFormatter::new("accounts"), &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert_eq!(written, 2);
    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with('\n'));
}

#[test]
fn stops_at_first_malformed_entry() {
    // Arrange
    let mut bad = profile_doc("insert");
    bad.insert("query", doc! { "documents": [] });
    let mut out = Vec::new();

    // Act
    let err = tail(
        ok(vec![ping(), bad, ping()]),
        &RecordFormatter::new("accounts"),
        &mut out,
    )
    .unwrap_err();

    // Assert
    assert!(matches!(err, TailError::Format(FormatError::Decode(_))));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}

#[test]
fn empty_source_writes_nothing() {
    let mut out = Vec::new();

    let written = tail(ok(vec![]), &RecordFormatter::new("accounts"), &mut out).unwrap();

    assert_eq!(written, 0);
    assert!(out.is_empty());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_aborts_the_loop() {
    let err = tail(
        ok(vec![ping()]),
        &RecordFormatter::new("accounts"),
        &mut BrokenPipe,
    )
    .unwrap_err();

    assert!(matches!(err, TailError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
}
