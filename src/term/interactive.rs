extern crate linefeed;
use super::{drive, dump, Args, Result};
use crate::mach::{Event, Program, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

/// Each entered line is loaded as a new program and run on the same
/// machine, so memory, pointer, register and tapes persist between lines.
/// Lines starting with `:` are commands.
pub fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<()> {
    let interface = Interface::new("bfvm")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut runtime = Runtime::with_config(Program::new(), args.config()).with_input(args.input_tape()?);

    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        match line.trim() {
            ":quit" | ":q" => break,
            ":state" => interface.write_fmt(format_args!("{}\n", runtime.snapshot()))?,
            ":tape" => {
                for (addr, value) in runtime.output().iter() {
                    interface.write_fmt(format_args!("[{}] = {}\n", addr, value))?;
                }
            }
            ":reset" => runtime.reset(),
            ":help" => interface.write_fmt(format_args!(
                ":state  machine state\n:tape   output tape\n:reset  clear the machine\n:quit   exit\n"
            ))?,
            command if command.starts_with(':') => interface.write_fmt(format_args!(
                "{}\n",
                Style::new()
                    .bold()
                    .paint(format!("unknown command {}; try :help", command))
            ))?,
            source => {
                if let Err(error) = runtime.enter(source) {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                    continue;
                }
                let mut emit = |s: String| interface.write_fmt(format_args!("{}", s));
                let event = drive(&mut runtime, args, &interrupted, &mut emit)?;
                debug!(?event, "line finished");
                let message = match event {
                    Event::Fault(error) => Some(error.to_string()),
                    Event::Interrupted => Some(format!("interrupted at instruction {}", runtime.pc())),
                    Event::Running => Some(format!("stopped at instruction {}", runtime.pc())),
                    Event::Halted => None,
                };
                if let Some(message) = message {
                    interface.write_fmt(format_args!("\n{}\n", Style::new().bold().paint(message)))?;
                }
                if args.dump {
                    interface.write_fmt(format_args!("{}", dump(&runtime)))?;
                }
            }
        }
    }
    Ok(())
}
