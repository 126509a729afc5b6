use c65_core::Target;

use crate::codec::{PAYLOAD_LEN, decode};
use crate::construct::{
    TYPE_INT, TYPE_SIZE_T, TYPE_UCHAR, TYPE_UINT, TYPE_VOID, UNSPECIFIED_COUNT, array_of,
    char_array_type, default_char, function_type, implicit_function_type, pointer_to, qualified,
    struct_type,
};
use crate::symtab::{AggregateDesc, FuncDesc, FuncFlags, SymTab, SymbolTable};
use crate::token::{Qualifiers, Token};
use crate::type_str::TypeStr;

#[test]
fn builtin_singletons() {
    assert_eq!(TYPE_UCHAR.tokens(), &[Token::UCHAR]);
    assert_eq!(TYPE_VOID.tokens(), &[Token::VOID]);
    assert_eq!(TYPE_SIZE_T, TYPE_UINT);
}

#[test]
fn default_char_follows_target() {
    let target = Target::default();
    assert_eq!(default_char(&target), Token::UCHAR);
    assert_eq!(default_char(&target.with_signed_chars(true)), Token::SCHAR);
}

#[test]
fn char_array_layout() {
    let ty = char_array_type(10, &Target::default());
    let tokens = ty.as_type_str().tokens();
    assert_eq!(tokens.len(), 1 + PAYLOAD_LEN + 1);
    assert_eq!(tokens[0], Token::ARRAY);
    assert_eq!(decode(&tokens[1..]), 10);
    assert_eq!(tokens[1 + PAYLOAD_LEN], Token::UCHAR);
}

#[test]
fn char_array_resolves_signedness_at_construction() {
    let target = Target::default().with_signed_chars(true);
    let ty = char_array_type(3, &target);
    assert_eq!(ty.as_type_str().element_type().head(), Token::SCHAR);
}

#[test]
fn unspecified_array_count() {
    let ty = array_of(TYPE_INT, None);
    assert_eq!(decode(&ty.as_type_str().tokens()[1..]), UNSPECIFIED_COUNT);
}

#[test]
fn pointer_to_allocates_len_plus_two() {
    let arr = array_of(TYPE_INT, Some(4));
    let ptr = pointer_to(arr.as_type_str());
    assert_eq!(ptr.capacity(), arr.len() + 2);
    assert_eq!(ptr.as_type_str().head(), Token::PTR);
    assert_eq!(ptr.as_type_str().indirect(), arr.as_type_str());
}

#[test]
fn implicit_function_registers_descriptor() {
    let mut symbols = SymTab::new();
    let ty = implicit_function_type(&mut symbols);
    let ty = ty.as_type_str();

    let desc = symbols.function(ty.function_descriptor());
    assert_eq!(
        desc.flags,
        FuncFlags::IMPLICIT | FuncFlags::EMPTY | FuncFlags::VARIADIC
    );
    assert_eq!(desc.param_count(), 0);
    assert_eq!(ty.function_return_type(), TYPE_INT);
}

#[test]
fn each_implicit_function_gets_its_own_descriptor() {
    let mut symbols = SymTab::new();
    let a = implicit_function_type(&mut symbols);
    let b = implicit_function_type(&mut symbols);
    assert_ne!(
        a.as_type_str().function_descriptor(),
        b.as_type_str().function_descriptor()
    );
}

#[test]
fn function_type_embeds_descriptor() {
    let mut symbols = SymTab::new();
    let id = symbols.add_function(FuncDesc::new(FuncFlags::FASTCALL));
    let ty = function_type(id, TYPE_VOID);
    assert_eq!(ty.as_type_str().function_descriptor(), id);
    assert_eq!(ty.as_type_str().function_return_type(), TYPE_VOID);
}

#[test]
fn struct_type_embeds_entry() {
    let mut symbols = SymTab::new();
    symbols.add_aggregate(AggregateDesc::incomplete("first"));
    let id = symbols.add_aggregate(AggregateDesc::incomplete("second"));
    let ty = struct_type(id);
    assert_eq!(ty.len(), 1 + PAYLOAD_LEN);
    assert_eq!(ty.as_type_str().aggregate_ref(), id);
}

#[test]
fn qualifiers_go_on_array_elements() {
    let arr = array_of(array_of(TYPE_INT, Some(2)).as_type_str(), Some(3));
    let ty = qualified(arr.as_type_str(), Qualifiers::CONST);
    let ty = ty.as_type_str();
    assert_eq!(ty.head(), Token::ARRAY);
    assert_eq!(ty.element_type().element_type().head().unqualified(), Token::INT);
    assert_eq!(ty.qualifiers(), Qualifiers::CONST);
}

#[test]
fn qualified_leaves_source_untouched() {
    let ptr = pointer_to(TYPE_INT);
    let cptr = qualified(ptr.as_type_str(), Qualifiers::VOLATILE);
    assert!(ptr.as_type_str().qualifiers().is_empty());
    assert!(cptr.as_type_str().is_volatile());
    assert!(!cptr.as_type_str().indirect().is_volatile());
}

#[test]
#[should_panic(expected = "qualified: expected object type, found token 0000")]
fn qualifying_an_empty_type_string_panics() {
    let _ = qualified(TypeStr::new(&[Token::END]), Qualifiers::CONST);
}
