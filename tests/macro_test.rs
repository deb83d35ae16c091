mod common;
use common::*;
use rpn::lang::ErrorCode;
use rpn::mach::Runtime;

#[test]
fn test_reserved_macro_name() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "macro dup foo").unwrap();
    assert!(error.is(ErrorCode::ReservedName));
    assert!(r.session().macros.is_empty());
    let error = eval(&mut r, "macro repeat foo").unwrap();
    assert!(error.is(ErrorCode::ReservedName));
}

#[test]
fn test_nested_macro() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "macro bad macro x").unwrap();
    assert!(error.is(ErrorCode::NestedMacro));
    assert!(r.session().macros.is_empty());
}

#[test]
fn test_invalid_macro_name() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "macro kib2 1024 *").unwrap();
    assert!(error.is(ErrorCode::InvalidName));
    let error = eval(&mut r, "macro").unwrap();
    assert!(error.is(ErrorCode::MissingArgument));
}

#[test]
fn test_redefinition_replaces_body() {
    assert_eq!(calc(&["macro k 1", "macro k 2", "k"]), "2");
}

#[test]
fn test_macro_with_empty_body() {
    assert_eq!(calc(&["macro nop", "1 nop 2"]), "1 2");
}

#[test]
fn test_clear_macros() {
    let mut r = Runtime::default();
    eval(&mut r, "macro kib 1024 *");
    eval(&mut r, "clm");
    let error = eval(&mut r, "kib").unwrap();
    assert!(error.is(ErrorCode::UnparsableToken));
}

#[test]
fn test_variable_shadows_macro() {
    assert_eq!(calc(&["macro k 100", "7 k=", "k"]), "7");
}

#[test]
fn test_render_macros() {
    let mut r = Runtime::default();
    eval(&mut r, "macro kib 1024 *");
    eval(&mut r, "macro sq dup *");
    assert_eq!(r.session().render_macros(), "kib: 1024 *, sq: dup *");
}
