use crate::profile::{DurationError, ProfileDuration};
use mongodb::bson::Bson;
use mongodb::bson::spec::ElementType;

#[test]
fn decodes_little_endian_millis() {
    let d = ProfileDuration::decode(ElementType::Int32, &[0xE8, 0x03, 0x00, 0x00]).unwrap();

    assert_eq!(d.as_millis(), 1000);
}

#[test]
fn rejects_short_payload() {
    let err = ProfileDuration::decode(ElementType::Int32, &[0xE8, 0x03, 0x00]).unwrap_err();

    assert_eq!(err, DurationError::WrongLength { len: 3 });
}

#[test]
fn rejects_long_payload() {
    let err = ProfileDuration::decode(ElementType::Int32, &[0; 8]).unwrap_err();

    assert_eq!(err, DurationError::WrongLength { len: 8 });
}

#[test]
fn rejects_non_int32_kind() {
    let err = ProfileDuration::decode(ElementType::Int64, &[0xE8, 0x03, 0x00, 0x00]).unwrap_err();

    assert_eq!(
        err,
        DurationError::UnexpectedKind {
            kind: ElementType::Int64
        }
    );
}

#[test]
fn converts_from_bson_int32_only() {
    assert_eq!(
        ProfileDuration::try_from(&Bson::Int32(42)).unwrap(),
        ProfileDuration::from_millis(42)
    );
    assert!(ProfileDuration::try_from(&Bson::Double(42.0)).is_err());
    assert!(ProfileDuration::try_from(&Bson::String("42".into())).is_err());
}

#[test]
fn displays_like_a_stopwatch() {
    let cases = [
        (0, "0s"),
        (15, "15ms"),
        (999, "999ms"),
        (1000, "1s"),
        (1500, "1.5s"),
        (1250, "1.25s"),
        (61_000, "1m1s"),
        (3_600_000, "1h0m0s"),
    ];

    for (millis, expected) in cases {
        assert_eq!(ProfileDuration::from_millis(millis).to_string(), expected);
    }
}
