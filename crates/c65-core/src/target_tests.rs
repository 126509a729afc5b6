use super::target::{Target, TargetError, TypeSizes};

#[test]
fn defaults_match_6502() {
    let target = Target::default();
    assert!(!target.signed_chars);
    assert_eq!(target.sizes.char, 1);
    assert_eq!(target.sizes.int, 2);
    assert_eq!(target.sizes.long, 4);
    assert_eq!(target.sizes.ptr, 2);
    assert_eq!(target.smallest_size(), 1);
}

#[test]
fn from_json_partial() {
    let target = Target::from_json(r#"{ "sizes": { "int": 4, "ptr": 4 } }"#).unwrap();
    assert!(!target.signed_chars);
    assert_eq!(target.sizes.int, 4);
    assert_eq!(target.sizes.ptr, 4);
    assert_eq!(target.sizes.long, TypeSizes::default().long);
}

#[test]
fn from_json_empty_object() {
    assert_eq!(Target::from_json("{}").unwrap(), Target::default());
}

#[test]
fn from_json_rejects_bad_types() {
    let err = Target::from_json(r#"{ "signed_chars": "yes" }"#).unwrap_err();
    assert!(matches!(err, TargetError::Json(_)));
    assert!(err.to_string().starts_with("invalid target description"));
}

#[test]
fn with_signed_chars() {
    let target = Target::default().with_signed_chars(true);
    assert!(target.signed_chars);
}
