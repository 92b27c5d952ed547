extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{Config, Event, InputTape, Program, Runtime};
use ansi_term::Style;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn, Level};

mod interactive;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Run augmented BrainFuck programs
#[derive(Parser, Debug, Clone)]
#[command(name = "bfvm", version)]
pub struct Args {
    /// Program file to run. Starts interactive mode when omitted.
    pub program: Option<PathBuf>,

    /// Fill the input tape with the bytes of this file
    #[arg(long, conflicts_with = "input_text")]
    pub input: Option<PathBuf>,

    /// Fill the input tape with this text
    #[arg(long)]
    pub input_text: Option<String>,

    /// Number of usable pages
    #[arg(long, default_value_t = 65536)]
    pub max_pages: u32,

    /// Bits the `~` instruction rotates by
    #[arg(long, default_value_t = 1)]
    pub rotate: u32,

    /// Instructions to run between checks for Ctrl-C
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: u64,

    /// Stop after this many instructions
    #[arg(long)]
    pub limit: Option<u64>,

    /// Print output tape writes as `address value` lines instead of characters
    #[arg(long)]
    pub numbers: bool,

    /// Print the machine state and output tape when the program stops
    #[arg(long)]
    pub dump: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new()
            .with_max_pages(self.max_pages)
            .with_rotate(self.rotate)
            .with_journal(true)
    }

    pub fn input_tape(&self) -> io::Result<InputTape> {
        if let Some(path) = &self.input {
            return Ok(InputTape::from_bytes(&fs::read(path)?));
        }
        if let Some(text) = &self.input_text {
            return Ok(InputTape::from_text(text));
        }
        Ok(InputTape::new())
    }
}

pub fn main() {
    let args = Args::parse();
    init_tracing(if args.verbose { Level::DEBUG } else { Level::WARN });
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "unable to install Ctrl-C handler");
    }
    let result = match &args.program {
        Some(_) => run_file(&args, interrupted),
        None => interactive::main_loop(&args, interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn run_file(args: &Args, interrupted: Arc<AtomicBool>) -> Result<()> {
    let path = match &args.program {
        Some(path) => path,
        None => return Ok(()),
    };
    let source = fs::read_to_string(path)?;
    let program = Program::load(&source)?;
    info!(instructions = program.len(), "loaded {}", path.display());
    let mut runtime = Runtime::with_config(program, args.config()).with_input(args.input_tape()?);
    let stdout = io::stdout();
    let mut emit = |s: String| -> io::Result<()> {
        let mut out = stdout.lock();
        out.write_all(s.as_bytes())?;
        out.flush()
    };
    let event = drive(&mut runtime, args, &interrupted, &mut emit)?;
    if args.dump {
        emit(dump(&runtime))?;
    }
    match event {
        Event::Fault(error) => Err(error.into()),
        Event::Interrupted => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("interrupted at instruction {}", runtime.pc()))
            );
            Ok(())
        }
        Event::Running | Event::Halted => Ok(()),
    }
}

/// Runs `runtime` in slices of `args.cycles` instructions, handing every
/// output tape write to `emit` as it happens. Returns the event that
/// stopped the run. Hitting `args.limit` returns `Event::Running`.
pub fn drive(
    runtime: &mut Runtime,
    args: &Args,
    interrupted: &AtomicBool,
    emit: &mut dyn FnMut(String) -> io::Result<()>,
) -> io::Result<Event> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let cycles = match args.limit {
            Some(limit) => {
                let left = limit.saturating_sub(runtime.steps());
                if left == 0 {
                    warn!("instruction limit of {} reached", limit);
                    return Ok(Event::Running);
                }
                left.min(args.cycles)
            }
            None => args.cycles,
        };
        let event = runtime.execute(cycles as usize);
        let writes = runtime.output_mut().drain();
        if !writes.is_empty() {
            emit(format_writes(&writes, args.numbers))?;
        }
        match event {
            Event::Running => {}
            Event::Halted => {
                debug!(steps = runtime.steps(), "halted");
                return Ok(event);
            }
            Event::Interrupted | Event::Fault(_) => return Ok(event),
        }
    }
}

pub fn format_writes(writes: &[(u16, u16)], numbers: bool) -> String {
    let mut s = String::new();
    for (addr, value) in writes {
        if numbers {
            s.push_str(&format!("{} {}\n", addr, value));
        } else {
            s.push(std::char::from_u32(u32::from(*value)).unwrap_or('\u{FFFD}'));
        }
    }
    s
}

pub fn dump(runtime: &Runtime) -> String {
    let mut s = format!("{}\n", runtime.snapshot());
    for (addr, value) in runtime.output().iter() {
        s.push_str(&format!("  [{}] = {}\n", addr, value));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discard(_: String) -> io::Result<()> {
        Ok(())
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["bfvm"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let a = args(&[]);
        assert!(a.program.is_none());
        assert_eq!(a.cycles, 5000);
        assert_eq!(a.config(), Config::new().with_journal(true));
    }

    #[test]
    fn test_options_map_onto_config() {
        let a = args(&["--max-pages", "4", "--rotate", "3", "prog.bf"]);
        assert_eq!(a.program, Some(PathBuf::from("prog.bf")));
        assert_eq!(a.config().max_pages(), 4);
        assert_eq!(a.config().rotate(), 3);
    }

    #[test]
    fn test_zero_cycles_rejected() {
        assert!(Args::try_parse_from(vec!["bfvm", "--cycles", "0"]).is_err());
    }

    #[test]
    fn test_input_text() {
        let a = args(&["--input-text", "Hi"]);
        assert_eq!(a.input_tape().unwrap().cells(), [72, 105]);
    }

    #[test]
    fn test_format_writes() {
        assert_eq!(format_writes(&[(0, 72), (1, 105)], false), "Hi");
        assert_eq!(format_writes(&[(0, 72), (9, 105)], true), "0 72\n9 105\n");
        assert_eq!(format_writes(&[(0, 0xD800)], false), "\u{FFFD}");
    }

    #[test]
    fn test_drive_respects_limit() {
        let a = args(&["--limit", "10", "--cycles", "3"]);
        let mut r = Runtime::with_config(Program::load("+[]").unwrap(), a.config());
        let flag = AtomicBool::new(false);
        let event = drive(&mut r, &a, &flag, &mut discard).unwrap();
        assert_eq!(event, Event::Running);
        assert_eq!(r.steps(), 10);
    }

    #[test]
    fn test_drive_streams_output() {
        let a = args(&[]);
        let mut r = Runtime::with_config(Program::load(">,[.<+^>,]").unwrap(), a.config())
            .with_input(InputTape::from_text("Hello"));
        let flag = AtomicBool::new(false);
        let mut out = String::new();
        let event = drive(&mut r, &a, &flag, &mut |s: String| -> io::Result<()> {
            out.push_str(&s);
            Ok(())
        })
        .unwrap();
        assert_eq!(event, Event::Halted);
        assert_eq!(out, "Hello");
    }

    #[test]
    fn test_drive_honours_interrupt_flag() {
        let a = args(&[]);
        let mut r = Runtime::with_config(Program::load("+[]").unwrap(), a.config());
        let flag = AtomicBool::new(true);
        let event = drive(&mut r, &a, &flag, &mut discard).unwrap();
        assert_eq!(event, Event::Interrupted);
        assert!(!flag.load(Ordering::SeqCst));
        assert_eq!(r.steps(), 0);
    }
}
