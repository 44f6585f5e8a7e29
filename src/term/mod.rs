extern crate ansi_term;
extern crate ctrlc;
use crate::lang::{Drill, Error};
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use clap::{Parser, ValueEnum};
use std::io::{ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const CYCLES: usize = 5000;

/// Beginner for-loop drills.
#[derive(Parser, Debug)]
#[command(name = "drills", version, about, long_about = None)]
pub struct Cli {
    /// Drills to run, in order. Runs every drill when omitted.
    #[arg(value_enum)]
    drills: Vec<DrillName>,

    /// List the available drills and exit.
    #[arg(long)]
    list: bool,

    /// Log drill progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DrillName {
    Range,
    EvenSum,
    Chars,
    Table,
}

impl DrillName {
    fn drill(self) -> Drill {
        match self {
            DrillName::Range => Drill::RANGE,
            DrillName::EvenSum => Drill::EVEN_SUM,
            DrillName::Chars => Drill::CHARS,
            DrillName::Table => Drill::TABLE,
        }
    }
}

impl Cli {
    pub fn selected(&self) -> Vec<Drill> {
        if self.drills.is_empty() {
            Drill::all().to_vec()
        } else {
            self.drills.iter().map(|name| name.drill()).collect()
        }
    }
}

pub fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed command line");

    if cli.list {
        let stdout = std::io::stdout();
        exit_on(list(&mut stdout.lock()).map(|_| true));
        return;
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }

    let runtime = Runtime::new(cli.selected());
    exit_on(main_loop(runtime, interrupted));
}

/// Exits non-zero on failure. A closed stdout is not a failure.
fn exit_on(result: std::io::Result<bool>) {
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) if error.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed");
        }
        Err(error) => {
            eprintln!("{}", paint(&Error::from(error)));
            std::process::exit(1);
        }
    }
}

fn list<W: Write>(out: &mut W) -> std::io::Result<()> {
    for drill in Drill::all().iter() {
        writeln!(out, "{:<10}{}", drill.name(), drill.about())?;
    }
    out.flush()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drives the runtime to completion. Returns false if any drill failed.
fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(CYCLES) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Errors(errors) => {
                ok = false;
                for error in errors.iter() {
                    eprintln!("{}", paint(error));
                }
            }
        }
    }
    out.flush()?;
    Ok(ok)
}

fn paint(error: &Error) -> ansi_term::ANSIString<'static> {
    Style::new().bold().paint(error.to_string())
}
