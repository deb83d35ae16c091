#![allow(dead_code)]
use rpn::lang::Error;
use rpn::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Print(ps) => s.push_str(&ps),
            Event::Exit => break,
        }
    }
    s
}

/// Evaluate one line and return the first error, if any.
pub fn eval(runtime: &mut Runtime, line: &str) -> Option<Error> {
    runtime.enter(line);
    let mut first = None;
    loop {
        match runtime.execute(5000) {
            Event::Stopped | Event::Exit => break,
            Event::Error(error) => {
                if first.is_none() {
                    first = Some(error);
                }
            }
            Event::Running | Event::Print(_) => {}
        }
    }
    first
}

/// Evaluate lines on a fresh runtime and render the stack.
pub fn calc(lines: &[&str]) -> String {
    let mut r = Runtime::default();
    for line in lines {
        if let Some(error) = eval(&mut r, line) {
            panic!("{:?} failed: {}", line, error);
        }
    }
    r.session().render_stack()
}

pub fn stack(runtime: &Runtime) -> String {
    runtime.session().render_stack()
}
