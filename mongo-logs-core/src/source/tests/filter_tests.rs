use crate::source::{NS_PATTERN, OP_PATTERN, profile_filter, resume_filter};
use mongodb::bson::{Bson, DateTime, doc};

#[test]
fn filter_excludes_cursor_ops_and_internal_namespaces() {
    let filter = profile_filter();

    assert_eq!(
        filter.get_document("op").unwrap(),
        &doc! { "$regex": OP_PATTERN }
    );
    assert_eq!(
        filter.get_document("ns").unwrap(),
        &doc! { "$regex": NS_PATTERN }
    );
}

#[test]
fn filter_excludes_profiler_and_index_listing_commands() {
    let filter = profile_filter();

    for key in ["command.profile", "command.listIndexes"] {
        assert_eq!(
            filter.get_document(key).unwrap(),
            &doc! { "$exists": false }
        );
    }
}

#[test]
fn fresh_tail_has_no_timestamp_bound() {
    assert!(resume_filter(None).get("ts").is_none());
}

#[test]
fn reopened_tail_resumes_at_last_timestamp() {
    let last = DateTime::from_millis(1_714_564_800_000);

    let filter = resume_filter(Some(last));

    assert_eq!(filter.get("ts"), Some(&Bson::Document(doc! { "$gte": last })));
    assert_eq!(filter.len(), 5);
}
