use super::profile_doc;
use crate::cli::logs::dump_raw;
use crate::conf::DebugConfig;
use mongodb::bson::Document;

fn ok(docs: Vec<Document>) -> Vec<Result<Document, mongodb::error::Error>> {
    docs.into_iter().map(Ok).collect()
}

#[test]
fn dumps_every_document_without_filter() {
    let mut out = Vec::new();

    let dumped = dump_raw(
        ok(vec![profile_doc("query"), profile_doc("remove")]),
        &DebugConfig::default(),
        &mut out,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(dumped, 2);
    assert_eq!(text.matches("\"op\"").count(), 2);
    assert!(text.ends_with("}\n\n"));
}

#[test]
fn honours_op_and_namespace_filter() {
    // Arrange
    let mut other_ns = profile_doc("remove");
    other_ns.insert("ns", "accounts.invites");
    let filter = DebugConfig {
        op: Some("remove".into()),
        namespace: Some("accounts.invites".into()),
        limit: None,
    };
    let mut out = Vec::new();

    // Act
    let dumped = dump_raw(
        ok(vec![profile_doc("query"), profile_doc("remove"), other_ns]),
        &filter,
        &mut out,
    )
    .unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert_eq!(dumped, 1);
    assert!(text.contains("accounts.invites"));
}

#[test]
fn stops_at_limit() {
    let filter = DebugConfig {
        limit: Some(2),
        ..Default::default()
    };
    let mut out = Vec::new();

    let dumped = dump_raw(
        ok(vec![
            profile_doc("query"),
            profile_doc("query"),
            profile_doc("query"),
        ]),
        &filter,
        &mut out,
    )
    .unwrap();

    assert_eq!(dumped, 2);
}
