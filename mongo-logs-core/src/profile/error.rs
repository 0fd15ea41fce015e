use mongodb::bson::spec::ElementType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("unknown kind for millis argument: {kind:?} (want Int32)")]
    UnexpectedKind { kind: ElementType },

    #[error("wrong length for millis argument: {len} bytes (want 4)")]
    WrongLength { len: usize },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{op}: missing `{field}` field")]
    MissingField {
        op: &'static str,
        field: &'static str,
    },

    #[error("{op}: could not convert `{field}` argument to {expected}")]
    FieldType {
        op: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("timestamp {millis}ms is out of range")]
    TimestampOutOfRange { millis: i64 },

    #[error("invalid `millis` field: {0}")]
    Duration(#[from] DurationError),
}

impl DecodeError {
    pub(crate) fn missing(op: &'static str, field: &'static str) -> Self {
        Self::MissingField { op, field }
    }

    pub(crate) fn field_type(op: &'static str, field: &'static str, expected: &'static str) -> Self {
        Self::FieldType {
            op,
            field,
            expected,
        }
    }
}
