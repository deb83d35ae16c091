use crate::mach::{Event, Runtime};

mod rewrite_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Print(ps) => s.push_str(&ps),
            Event::Exit => {
                s.push_str("EXIT\n");
                break;
            }
        }
    }
    s
}

fn stack(runtime: &Runtime) -> String {
    runtime.session().render_stack()
}
