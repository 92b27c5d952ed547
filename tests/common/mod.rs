#![allow(dead_code)]
use bfvm::mach::{Config, Event, InputTape, Program, Runtime};

pub fn runtime(source: &str, input: &str) -> Runtime {
    let program = Program::load(source).unwrap();
    Runtime::with_config(program, Config::new().with_journal(true))
        .with_input(InputTape::from_text(input))
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Runs in slices of `cycles`, collecting output tape writes as text.
/// Gives up after a million instructions.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        let event = runtime.execute(cycles);
        for (_, value) in runtime.output_mut().drain() {
            s.push(std::char::from_u32(u32::from(value)).unwrap_or('?'));
        }
        match event {
            Event::Halted => break,
            Event::Running => {
                if runtime.steps() > 1_000_000 {
                    s.push_str("\nExecution cycles exceeded.\n");
                    break;
                }
            }
            Event::Interrupted => {
                s.push_str("\nInterrupted.\n");
                break;
            }
            Event::Fault(error) => {
                s.push_str(&format!("\n{}\n", error));
                break;
            }
        }
    }
    s
}

/// Output tape contents in address order.
pub fn tape(runtime: &Runtime) -> String {
    runtime
        .output()
        .iter()
        .map(|(_, v)| std::char::from_u32(u32::from(v)).unwrap_or('?'))
        .collect()
}
