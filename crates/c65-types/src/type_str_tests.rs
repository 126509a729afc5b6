use crate::construct::{TYPE_INT, TYPE_UCHAR, pointer_to};
use crate::token::Token;
use crate::type_str::{TypeStr, TypeString};

#[test]
fn length_excludes_sentinel() {
    assert_eq!(TYPE_INT.len(), 1);
    assert_eq!(TypeStr::new(&[Token::END]).len(), 0);
    assert!(TypeStr::new(&[Token::END]).is_empty());
    assert!(!TYPE_INT.is_empty());
}

#[test]
fn tokens_after_sentinel_are_ignored() {
    let tokens = [Token::PTR, Token::INT, Token::END, Token::LONG, Token::END];
    let ty = TypeStr::new(&tokens);
    assert_eq!(ty.len(), 2);
    assert_eq!(ty.tokens(), &[Token::PTR, Token::INT]);
    assert_eq!(ty.with_terminator(), &[Token::PTR, Token::INT, Token::END]);
    assert_eq!(ty, TypeStr::new(&tokens[..3]));
}

#[test]
fn constructed_strings_have_one_sentinel() {
    let ty = pointer_to(pointer_to(TYPE_INT).as_type_str());
    let ty = ty.as_type_str();
    assert_eq!(ty.len(), 3);
    assert_eq!(ty.tokens().iter().filter(|t| t.is_end()).count(), 0);
    assert_eq!(ty.with_terminator().last(), Some(&Token::END));
}

#[test]
fn allocate_fills_with_sentinels() {
    let buf = TypeString::allocate(4);
    assert_eq!(buf.capacity(), 4);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
}

#[test]
fn copy_into_existing_buffer() {
    let mut buf = TypeString::allocate(3);
    buf.copy_from(TYPE_INT);
    assert_eq!(buf, TYPE_INT);

    let ptr = pointer_to(TYPE_UCHAR);
    buf.copy_from(ptr.as_type_str());
    assert_eq!(buf, ptr);
    assert_eq!(buf.capacity(), 3);
}

#[test]
fn concat_appends_at_sentinel() {
    let mut buf = TypeString::allocate(4);
    buf.copy_from(TypeStr::new(&[Token::PTR, Token::END]));
    buf.concat(TypeStr::new(&[Token::PTR, Token::END]));
    buf.concat(TYPE_INT);
    assert_eq!(buf.as_type_str().tokens(), &[Token::PTR, Token::PTR, Token::INT]);
    assert_eq!(buf.len(), 3);
}

#[test]
fn concat_of_copy_is_a_then_b() {
    let a = pointer_to(TYPE_INT);
    let b = pointer_to(TYPE_UCHAR);
    let mut buf = TypeString::allocate(a.len() + b.len() + 1);
    buf.copy_from(a.as_type_str());
    buf.concat(b.as_type_str());

    let mut expected = a.as_type_str().tokens().to_vec();
    expected.extend_from_slice(b.as_type_str().tokens());
    assert_eq!(buf.as_type_str().tokens(), expected.as_slice());
    assert_eq!(buf.as_type_str().with_terminator().len(), expected.len() + 1);
}

#[test]
#[should_panic(expected = "internal error: type string needs 3 tokens, buffer holds 2")]
fn concat_never_grows() {
    let mut buf = TypeString::allocate(2);
    buf.copy_from(TYPE_INT);
    buf.concat(TYPE_INT);
}

#[test]
#[should_panic(expected = "buffer holds 0")]
fn allocate_needs_room_for_sentinel() {
    let _ = TypeString::allocate(0);
}

#[test]
fn duplicate_is_exact_and_independent() {
    let original = pointer_to(TYPE_INT);
    let mut dup = original.as_type_str().duplicate();
    assert_eq!(dup, original);
    assert_eq!(dup.capacity(), original.len() + 1);

    dup.copy_from(TYPE_UCHAR);
    assert_eq!(dup.as_type_str().tokens(), &[Token::UCHAR]);
    assert_eq!(original.as_type_str().tokens(), &[Token::PTR, Token::INT]);
}

#[test]
fn sub_view_copies_into_fresh_buffer() {
    let ptr = pointer_to(TYPE_INT);
    let pointee = ptr.as_type_str().indirect();
    let owned = pointee.to_type_string();
    drop(ptr);
    assert_eq!(owned, TYPE_INT);
}

#[test]
#[should_panic(expected = "internal error: type string has no terminator")]
fn missing_sentinel_is_fatal() {
    TypeStr::new(&[Token::INT, Token::INT]).len();
}

#[test]
fn debug_shows_raw_tokens() {
    let ptr = pointer_to(TYPE_INT);
    assert_eq!(format!("{ptr:?}"), "TypeString[006D 0223]");
    assert_eq!(format!("{:?}", TYPE_INT), "TypeStr[0223]");
}
