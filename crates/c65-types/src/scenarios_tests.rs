//! End-to-end walks through the type core as the compiler drives it.

use c65_core::{DiagnosticKind, Diagnostics, Target};

use crate::construct::{
    TYPE_INT, array_of, char_array_type, function_type, implicit_function_type, pointer_to,
};
use crate::layout::TypeEnv;
use crate::render::render_signature;
use crate::symtab::{FuncDesc, FuncFlags, ParamDesc, SymTab, SymbolTable};

#[test]
fn char_array_of_ten() {
    let target = Target::default();
    let symbols = SymTab::new();
    let env = TypeEnv::new(&target, &symbols);

    let ty = char_array_type(10, &target);
    let ty = ty.as_type_str();
    assert_eq!(ty.size_of(&env), 10);
    assert_eq!(ty.element_count(), 10);
    insta::assert_snapshot!(ty.render(&symbols), @"unsigned char [10]");
}

#[test]
fn pointer_to_int() {
    let target = Target::default();
    let symbols = SymTab::new();
    let env = TypeEnv::new(&target, &symbols);

    let ptr = pointer_to(TYPE_INT);
    insta::assert_snapshot!(ptr.as_type_str().render(&symbols), @"int *");
    assert_eq!(ptr.as_type_str().size_of(&env), target.sizes.ptr);

    let big = array_of(TYPE_INT, Some(1000));
    let ptr_to_big = pointer_to(big.as_type_str());
    assert_eq!(ptr_to_big.as_type_str().size_of(&env), target.sizes.ptr);
    assert_eq!(ptr_to_big.as_type_str().indirect(), big.as_type_str());
}

#[test]
fn unknown_size_reported_once() {
    let target = Target::default();
    let symbols = SymTab::new();
    let env = TypeEnv::new(&target, &symbols);
    let mut diagnostics = Diagnostics::new();

    let open = array_of(TYPE_INT, None);
    let size = open.as_type_str().checked_size_of(&env, &mut diagnostics);

    assert_eq!(size, target.smallest_size());
    assert_ne!(size, 0);
    assert_eq!(diagnostics.len(), 1);
    let message = diagnostics.iter().next().unwrap();
    assert_eq!(message.kind(), DiagnosticKind::SizeUnknown);
    insta::assert_snapshot!(diagnostics.render(), @"error: size of data type `int []` is unknown");
}

#[test]
fn implicit_function() {
    let mut symbols = SymTab::new();
    let ty = implicit_function_type(&mut symbols);
    let ty = ty.as_type_str();

    assert!(ty.is_variadic(&symbols));
    assert!(!ty.is_fastcall(&symbols));
    insta::assert_snapshot!(ty.render(&symbols), @"function returning int");
    insta::assert_snapshot!(render_signature("getchar", ty, &symbols), @"int getchar ()");
}

#[test]
fn fastcall_through_pointer() {
    let mut symbols = SymTab::new();
    let desc = FuncDesc::new(FuncFlags::FASTCALL)
        .param(ParamDesc::new("c", TYPE_INT.to_type_string()));
    let id = symbols.add_function(desc);

    let func = function_type(id, TYPE_INT);
    let ptr = pointer_to(func.as_type_str());

    assert!(func.as_type_str().is_fastcall(&symbols));
    assert!(ptr.as_type_str().is_fastcall(&symbols));
    assert!(!ptr.as_type_str().is_variadic(&symbols));
    insta::assert_snapshot!(
        render_signature("putchar", ptr.as_type_str(), &symbols),
        @"int __fastcall__ putchar (int)"
    );
}

#[test]
fn signed_char_session() {
    let target = Target::from_json(r#"{ "signed_chars": true }"#).unwrap();
    let symbols = SymTab::new();
    let env = TypeEnv::new(&target, &symbols);

    let ty = char_array_type(4, &target);
    let decayed = ty.as_type_str().array_to_pointer();
    insta::assert_snapshot!(decayed.as_type_str().render(&symbols), @"signed char *");
    assert_eq!(decayed.as_type_str().pointer_target_size_of(&env), 1);
}
