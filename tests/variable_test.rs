mod common;
use common::*;
use rpn::lang::ErrorCode;
use rpn::mach::{Runtime, Val};

#[test]
fn test_assignment_pops() {
    let mut r = Runtime::default();
    eval(&mut r, "1 2 y=");
    assert_eq!(stack(&r), "1");
    assert_eq!(r.session().var.fetch("y"), Some(Val::Integer(2)));
}

#[test]
fn test_assignment_errors() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "x=").unwrap();
    assert!(error.is(ErrorCode::EmptyStack));
    assert_eq!(error.to_string(), "No value to save as a variable");
    let error = eval(&mut r, "5 swap=").unwrap();
    assert!(error.is(ErrorCode::ReservedName));
    assert_eq!(stack(&r), "5");
}

#[test]
fn test_overwrite() {
    assert_eq!(calc(&["1 a=", "2.5 a=", "a"]), "2.5");
}

#[test]
fn test_names_may_contain_digits_and_underscores() {
    assert_eq!(calc(&["3 my_var2=", "my_var2 my_var2 *"]), "9");
}

#[test]
fn test_clear_variables() {
    let mut r = Runtime::default();
    eval(&mut r, "1 a= 2 b=");
    assert_eq!(r.session().render_vars(), "a=1, b=2");
    eval(&mut r, "clv");
    assert!(r.session().var.is_empty());
    let error = eval(&mut r, "a").unwrap();
    assert!(error.is(ErrorCode::UnparsableToken));
}

#[test]
fn test_clear_all() {
    let mut r = Runtime::default();
    eval(&mut r, "1 a= macro m 1");
    assert!(!r.session().macros.is_empty());
    eval(&mut r, "9 9 cla");
    assert_eq!(stack(&r), "");
    assert!(r.session().var.is_empty());
    assert!(r.session().macros.is_empty());
}
