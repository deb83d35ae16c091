use super::*;
use crate::mach::MAX_PENDING;

#[test]
fn test_repeat_splices_copies_of_next_token() {
    let mut r = Runtime::default();
    r.enter("1 1 2 repeat dup");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "1 1 1 1");
}

#[test]
fn test_repeat_rest_of_line_still_runs() {
    let mut r = Runtime::default();
    r.enter("1 2 3 4 3 repeat + 10 *");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "100");
}

#[test]
fn test_repeat_of_macro_invocation() {
    let mut r = Runtime::default();
    r.enter("macro inc ++");
    run(&mut r);
    r.enter("0 5 repeat inc");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "5");
}

#[test]
fn test_macro_using_repeat() {
    let mut r = Runtime::default();
    r.enter("macro sum depth -- repeat +");
    run(&mut r);
    r.enter("1 2 3 4 sum");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "10");
}

#[test]
fn test_nested_macros_resolve_at_invocation() {
    let mut r = Runtime::default();
    r.enter("macro quad double double");
    run(&mut r);
    r.enter("macro double 2 *");
    run(&mut r);
    r.enter("3 quad");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "12");
    r.enter("macro double 3 *");
    run(&mut r);
    r.enter("clr 1 quad");
    run(&mut r);
    assert_eq!(stack(&r), "9");
}

#[test]
fn test_macro_reads_variable_at_invocation() {
    let mut r = Runtime::default();
    r.enter("macro scale k *");
    run(&mut r);
    r.enter("2 k= 5 scale");
    assert_eq!(stack_after(&mut r), "10");
    r.enter("clr 3 k= 5 scale");
    assert_eq!(stack_after(&mut r), "15");
}

fn stack_after(r: &mut Runtime) -> String {
    assert_eq!(run(r), "");
    stack(r)
}

#[test]
fn test_macro_definition_ends_the_line() {
    let mut r = Runtime::default();
    r.enter("1 macro two 2 3");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "1");
    r.enter("two");
    run(&mut r);
    assert_eq!(stack(&r), "1 2 3");
}

#[test]
fn test_repeat_errors_abort_line() {
    let mut r = Runtime::default();
    r.enter("2 repeat");
    assert_eq!(
        run(&mut r),
        "Action to repeat is required after \"repeat\" command\n"
    );
    assert_eq!(stack(&r), "2");
    r.enter("clr repeat dup 5");
    assert_eq!(run(&mut r), "Integer number of repeats is required\n");
    assert_eq!(stack(&r), "");
    r.enter("0 repeat dup 5");
    assert_eq!(run(&mut r), "Number of repeats should be a positive integer\n");
    assert_eq!(stack(&r), "0");
    r.enter("clr 1.5 repeat dup");
    assert_eq!(run(&mut r), "Number of repeats should be a positive integer\n");
}

#[test]
fn test_self_referencing_macro_hits_expansion_bound() {
    let mut r = Runtime::default();
    r.enter("macro grow grow 1");
    run(&mut r);
    r.enter("grow");
    assert_eq!(run(&mut r), "Expansion is too large\n");
    assert_eq!(stack(&r), "");
}

#[test]
fn test_executed_tokens_do_not_count_toward_bound() {
    let mut r = Runtime::default();
    r.enter("macro m 1 +");
    run(&mut r);
    r.enter("0 600000 repeat m");
    assert_eq!(run(&mut r), "");
    assert_eq!(stack(&r), "600000");
}

#[test]
fn test_tail_call_macro_keeps_pending_list_short() {
    let mut r = Runtime::default();
    r.enter("macro count ++ count");
    run(&mut r);
    r.enter("0 count");
    assert_eq!(r.execute(MAX_PENDING), Event::Running);
    assert_eq!(r.execute(MAX_PENDING), Event::Running);
    r.interrupt();
    assert!(matches!(r.execute(1), Event::Error(_)));
    assert_eq!(r.execute(1), Event::Stopped);
}

#[test]
fn test_huge_repeat_is_refused_before_expanding() {
    let mut r = Runtime::default();
    r.enter("9223372036854775807 repeat dup");
    assert_eq!(run(&mut r), "Expansion is too large\n");
    assert_eq!(stack(&r), "9223372036854775807");
}

#[test]
fn test_help_and_exit() {
    let mut r = Runtime::default();
    r.enter("1 help 2");
    let out = run(&mut r);
    assert!(out.starts_with("USAGE:"));
    assert_eq!(stack(&r), "1 2");
    r.enter("3 exit 4");
    assert_eq!(run(&mut r), "EXIT\n");
    assert_eq!(stack(&r), "1 2 3");
}
