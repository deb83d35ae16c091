mod common;
use common::*;
use rpn::lang::ErrorCode;
use rpn::mach::Runtime;

#[test]
fn test_swap_and_drop() {
    assert_eq!(calc(&["1 2 swap"]), "2 1");
    assert_eq!(calc(&["1 2 3 drop"]), "1 2");
    assert_eq!(calc(&["1 2 3 4 2 dropn"]), "1 2");
}

#[test]
fn test_drop_n_is_all_or_nothing() {
    let mut r = Runtime::default();
    eval(&mut r, "1 2");
    let error = eval(&mut r, "5 dropn").unwrap();
    assert!(error.is(ErrorCode::EmptyStack));
    assert_eq!(stack(&r), "1 2 5");
}

#[test]
fn test_drop_on_empty_stack() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "drop").unwrap();
    assert!(error.is(ErrorCode::EmptyStack));
}

#[test]
fn test_depth() {
    assert_eq!(calc(&["depth"]), "0");
    assert_eq!(calc(&["7 8 9 depth"]), "7 8 9 3");
}

#[test]
fn test_dupn() {
    assert_eq!(calc(&["1 2 3 2 dupn"]), "1 2 3 2 3");
    let mut r = Runtime::default();
    let error = eval(&mut r, "1 -2 dupn").unwrap();
    assert!(error.is(ErrorCode::InvalidCount));
    assert_eq!(stack(&r), "1 -2");
}

#[test]
fn test_roll() {
    assert_eq!(calc(&["1 2 3 4 1 roll"]), "4 1 2 3");
    assert_eq!(calc(&["1 2 3 4 1 rolld"]), "2 3 4 1");
    assert_eq!(calc(&["1 2 3 4 -1 roll"]), "2 3 4 1");
    assert_eq!(calc(&["1 2 3 4 5 roll"]), "4 1 2 3");
    assert_eq!(calc(&["0 roll"]), "");
}

#[test]
fn test_roll_then_rolld_is_identity() {
    assert_eq!(calc(&["1 2 3 4 5 3 roll 3 rolld"]), "1 2 3 4 5");
}

#[test]
fn test_pick() {
    assert_eq!(calc(&["10 20 30 3 pick"]), "20 30 10");
    assert_eq!(calc(&["10 20 30 1 pick"]), "10 20 30");
    assert_eq!(calc(&["10 20 30 9 pick"]), "10 20 30");
    let mut r = Runtime::default();
    let error = eval(&mut r, "10 0 pick").unwrap();
    assert!(error.is(ErrorCode::InvalidCount));
    assert_eq!(stack(&r), "10 0");
}

#[test]
fn test_clear_stack() {
    assert_eq!(calc(&["1 2 3 clr 4"]), "4");
}

#[test]
fn test_vertical_toggle() {
    let mut r = Runtime::default();
    eval(&mut r, "1 2 stack");
    assert_eq!(stack(&r), "1\n2");
    eval(&mut r, "stack");
    assert_eq!(stack(&r), "1 2");
}
