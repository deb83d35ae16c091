//! # RPN
//!
//! Stack calculator with variables, macros and repeat.
//!

use clap::Parser;
use rpn::mach::{Radix, Runtime};
use rpn::term::{self, Settings};
use std::io::{IsTerminal, Read};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rpn", version)]
#[command(about = "Reverse Polish Notation calculator")]
struct Cli {
    /// Expression to evaluate, e.g. `1 2 +`; interactive when absent
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Initial display mode: dec, hex, bin or oct
    #[arg(long, default_value = "dec")]
    radix: Radix,

    /// Start with the stack displayed vertically
    #[arg(long)]
    vertical: bool,

    /// Never color the output
    #[arg(long)]
    no_color: bool,

    /// Tokens executed between checks for Ctrl-C
    #[arg(long, default_value = "5000")]
    cycles: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("RPN_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut runtime = Runtime::default();
    runtime.session_mut().radix = cli.radix;
    runtime.session_mut().vertical = cli.vertical;

    let stdout_is_tty = std::io::stdout().is_terminal();
    let settings = Settings {
        color: stdout_is_tty && !cli.no_color,
        cycles: cli.cycles.max(1),
    };

    let mut words = cli.expression;
    if !std::io::stdin().is_terminal() {
        let mut piped = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut piped) {
            error!("Failed to read stdin: {}", e);
            std::process::exit(1);
        }
        words.extend(
            piped
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }

    if !words.is_empty() {
        let line = words.join(" ");
        debug!(%line, "batch mode");
        let mut out = std::io::stdout().lock();
        if let Err(e) = term::batch(&mut runtime, &line, settings, &mut out) {
            error!("Failed to write output: {}", e);
            std::process::exit(1);
        }
    } else if stdout_is_tty {
        term::main(runtime, settings);
    }
}
