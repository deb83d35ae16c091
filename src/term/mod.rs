/*!
## Rust Terminal Module

Interactive line editing and one-shot batch evaluation on top of
`mach::Runtime`.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime, Session};
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult, Signal};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Front end options from the command line.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub color: bool,
    pub cycles: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            color: false,
            cycles: 5000,
        }
    }
}

/// ## Output styles
///
/// All plain when color is off, so painting is always safe.

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub stack: Style,
    pub vars: Style,
    pub macros: Style,
    pub marker: Style,
    pub error: Style,
}

impl Palette {
    pub fn new(color: bool) -> Palette {
        if color {
            Palette {
                stack: Colour::Purple.normal(),
                vars: Colour::Yellow.normal(),
                macros: Colour::Green.normal(),
                marker: Colour::Cyan.bold(),
                error: Colour::Red.normal(),
            }
        } else {
            Palette {
                stack: Style::new(),
                vars: Style::new(),
                macros: Style::new(),
                marker: Style::new(),
                error: Style::new(),
            }
        }
    }
}

/// Wraps escape sequences in the markers linefeed uses to skip them
/// when measuring the prompt.
fn invisible(style: Style, text: &str) -> String {
    if style == Style::new() {
        return text.to_string();
    }
    format!(
        "\x01{}\x02{}\x01{}\x02",
        style.prefix(),
        text,
        style.suffix()
    )
}

/// `[x=1, y=2] [kib: 1024 *] 1 2 > `
///
/// In vertical mode the stack is written above the prompt instead.
pub fn prompt(session: &Session, palette: &Palette) -> String {
    let mut segments = vec![];
    let vars = session.render_vars();
    if !vars.is_empty() {
        segments.push(invisible(palette.vars, &format!("[{}]", vars)));
    }
    let macros = session.render_macros();
    if !macros.is_empty() {
        segments.push(invisible(palette.macros, &format!("[{}]", macros)));
    }
    if !session.vertical && !session.stack.is_empty() {
        segments.push(invisible(palette.stack, &session.render_stack()));
    }
    segments.push(invisible(palette.marker, ">"));
    let mut s = segments.join(" ");
    s.push(' ');
    s
}

pub fn main(runtime: Runtime, settings: Settings) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    if let Err(error) = main_loop(runtime, settings, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(
    mut runtime: Runtime,
    settings: Settings,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<()> {
    let palette = Palette::new(settings.color);
    let interface = Interface::new("rpn")?;
    interface.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(settings.cycles) {
            Event::Stopped => {
                let session = runtime.session();
                if session.vertical && !session.stack.is_empty() {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        palette.stack.paint(session.render_stack())
                    ))?;
                }
                interface.set_prompt(&prompt(session, &palette))?;
                match interface.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            interface.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            Event::Running => {}
            Event::Error(error) => {
                eprintln!("{}", palette.error.paint(error.to_string()));
            }
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Exit => break,
        }
    }
    debug!("leaving interactive mode");
    Ok(())
}

/// Evaluate one line and write the stack to `out`. Errors go to stderr
/// and the stack is still written. `exit` skips the stack.
pub fn batch<W: Write>(
    runtime: &mut Runtime,
    line: &str,
    settings: Settings,
    out: &mut W,
) -> std::io::Result<()> {
    let palette = Palette::new(settings.color);
    runtime.enter(line);
    loop {
        match runtime.execute(settings.cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Error(error) => {
                eprintln!("{}", palette.error.paint(error.to_string()));
            }
            Event::Print(s) => write!(out, "{}", s)?,
            Event::Exit => return Ok(()),
        }
    }
    let session = runtime.session();
    if !session.stack.is_empty() {
        writeln!(out, "{}", palette.stack.paint(session.render_stack()))?;
    }
    Ok(())
}
