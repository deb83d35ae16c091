mod common;
use common::*;
use rpn::lang::ErrorCode;
use rpn::mach::{Runtime, Val};

#[test]
fn test_push_only_keeps_input_order() {
    assert_eq!(calc(&["5 -1 2.5 0x10 0b11 1e2"]), "5 -1 2.5 16 3 100");
}

#[test]
fn test_dup_swap_drop_round_trip() {
    assert_eq!(calc(&["42 dup swap drop"]), "42");
}

#[test]
fn test_repeat_dup() {
    assert_eq!(calc(&["1 1 2 repeat dup"]), "1 1 1 1");
}

#[test]
fn test_repeat_plus_sums_the_stack() {
    assert_eq!(calc(&["1 2 3 4 5 4 repeat +"]), "15");
}

#[test]
fn test_macro_inc() {
    assert_eq!(calc(&["macro inc ++", "5 inc"]), "6");
}

#[test]
fn test_variable_substitution() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "1024 x="), None);
    assert_eq!(stack(&r), "");
    assert_eq!(eval(&mut r, "x 2 *"), None);
    assert_eq!(stack(&r), "2048");
    assert_eq!(r.session().var.fetch("x"), Some(Val::Integer(1024)));
}

#[test]
fn test_dup_n() {
    assert_eq!(calc(&["1 2 3 dup3"]), "1 2 3 1 2 3");
    let mut r = Runtime::default();
    eval(&mut r, "1 2");
    let error = eval(&mut r, "dup3").unwrap();
    assert!(error.is(ErrorCode::InsufficientDepth));
    assert_eq!(stack(&r), "1 2");
    let error = eval(&mut r, "dup0").unwrap();
    assert!(error.is(ErrorCode::InvalidCount));
}

#[test]
fn test_division_by_zero_keeps_operands() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "3 0 /").unwrap();
    assert!(error.is(ErrorCode::DivisionByZero));
    assert_eq!(error.to_string(), "Zero division error");
    assert_eq!(stack(&r), "3 0");
}

#[test]
fn test_error_aborts_rest_of_line_but_keeps_prior_work() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "1 2 + bogus 4 5").unwrap();
    assert!(error.is(ErrorCode::UnparsableToken));
    assert_eq!(stack(&r), "3");
    assert_eq!(eval(&mut r, "4"), None);
    assert_eq!(stack(&r), "3 4");
}

#[test]
fn test_missing_operands() {
    let mut r = Runtime::default();
    let error = eval(&mut r, "1 +").unwrap();
    assert!(error.is(ErrorCode::MissingArgument));
    assert_eq!(error.to_string(), "This operation requires two arguments");
    assert_eq!(stack(&r), "1");
    let error = eval(&mut r, "clr sqrt").unwrap();
    assert!(error.is(ErrorCode::MissingArgument));
}

#[test]
fn test_domain_errors_are_generic() {
    let mut r = Runtime::default();
    for line in &["-1 sqrt", "2 asin", "0 ln", "1.5 1 &", "1e308 10 *", "-1 fact"] {
        let error = eval(&mut r, line).unwrap();
        assert_eq!(error.code(), ErrorCode::InvalidOperation, "{}", line);
        eval(&mut r, "clr");
    }
}

#[test]
fn test_failed_operation_restores_operand() {
    let mut r = Runtime::default();
    eval(&mut r, "-4 sqrt");
    assert_eq!(stack(&r), "-4");
}

#[test]
fn test_empty_line_is_a_no_op() {
    let mut r = Runtime::default();
    eval(&mut r, "1");
    assert_eq!(eval(&mut r, ""), None);
    assert_eq!(eval(&mut r, "   \t "), None);
    assert_eq!(stack(&r), "1");
}

#[test]
fn test_results_are_normalized() {
    assert_eq!(calc(&["6 3 /"]), "2");
    assert_eq!(calc(&["7 2 /"]), "3.5");
    assert_eq!(calc(&["0.5 0.5 +"]), "1");
    assert_eq!(calc(&["4.0"]), "4");
    assert_eq!(calc(&["0 cos"]), "1");
}

#[test]
fn test_exit_stops_line() {
    let mut r = Runtime::default();
    r.enter("1 exit 2");
    exec(&mut r);
    assert_eq!(stack(&r), "1");
}
