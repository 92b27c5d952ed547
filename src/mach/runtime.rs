use super::{Address, Config, InputTape, Memory, OutputTape, Pointer, Program};
use crate::error;
use crate::lang::{Error, Token};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Owns all machine state: program counter, data pointer, register,
/// paged memory and both peripheral tapes. Nothing is shared between
/// runtimes, so independent programs need independent instances.
///
/// The engine can be driven one instruction at a time with [`step`],
/// in bounded slices with [`execute`], or to completion with [`run`].
///
/// [`step`]: Runtime::step
/// [`execute`]: Runtime::execute
/// [`run`]: Runtime::run

#[derive(Debug, Default)]
pub struct Runtime {
    config: Config,
    program: Program,
    pc: Address,
    pointer: Pointer,
    register: u16,
    memory: Memory,
    input: InputTape,
    output: OutputTape,
    steps: u64,
    interrupted: bool,
}

/// Why a call to [`Runtime::execute`] returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out before the program finished.
    Running,
    /// The program counter is past the last instruction.
    Halted,
    /// [`Runtime::interrupt`] was called. Execution can resume.
    Interrupted,
    /// The current instruction faulted and was not applied.
    Fault(Error),
}

/// Machine state for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pc: Address,
    pub len: usize,
    pub pointer: Pointer,
    pub register: u16,
    pub cell: u16,
    pub pages: usize,
    pub steps: u64,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "pc {}/{} page {} offset {} register {} cell {} pages {} steps {}",
            self.pc,
            self.len,
            self.pointer.page,
            self.pointer.offset,
            self.register,
            self.cell,
            self.pages,
            self.steps
        )
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime::with_config(program, Config::default())
    }

    pub fn with_config(program: Program, config: Config) -> Runtime {
        let output = if config.journal() {
            OutputTape::with_journal()
        } else {
            OutputTape::new()
        };
        Runtime {
            config,
            program,
            output,
            ..Runtime::default()
        }
    }

    /// Loads `source` into a fresh runtime with the default configuration.
    pub fn load(source: &str) -> Result<Runtime> {
        Ok(Runtime::new(Program::load(source)?))
    }

    pub fn with_input(mut self, input: InputTape) -> Runtime {
        self.input = input;
        self
    }

    /// Replaces the program and rewinds to its first instruction.
    /// Memory, register, pointer and tapes carry over, which is how the
    /// interactive driver runs one line after another on the same machine.
    /// On a load error the runtime is left untouched.
    pub fn enter(&mut self, source: &str) -> Result<()> {
        let program = Program::load(source)?;
        self.program = program;
        self.pc = 0;
        self.interrupted = false;
        Ok(())
    }

    /// Back to the initial state. The program and input tape are kept.
    pub fn reset(&mut self) {
        debug!(steps = self.steps, "reset");
        self.pc = 0;
        self.pointer = Pointer::default();
        self.register = 0;
        self.memory.clear();
        self.output.clear();
        self.steps = 0;
        self.interrupted = false;
    }

    /// Stops the next [`Runtime::execute`] before it runs anything.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Executes one instruction. Returns `Ok(false)` without doing
    /// anything once the program has halted. A fault leaves every part
    /// of the machine as it was before the instruction.
    pub fn step(&mut self) -> Result<bool> {
        let token = match self.program.token(self.pc) {
            Some(token) => token,
            None => return Ok(false),
        };
        self.exec(token)?;
        self.pc += 1;
        self.steps += 1;
        Ok(true)
    }

    /// Runs until the program halts or faults.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        debug!(steps = self.steps, "halted");
        Ok(())
    }

    /// Runs at most `cycles` instructions, or until halt when `cycles` is 0.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.interrupted {
            self.interrupted = false;
            debug!(pc = self.pc, "interrupted");
            return Event::Interrupted;
        }
        let mut remaining = cycles;
        loop {
            if cycles > 0 {
                if remaining == 0 {
                    return if self.is_halted() {
                        Event::Halted
                    } else {
                        Event::Running
                    };
                }
                remaining -= 1;
            }
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Event::Halted,
                Err(error) => {
                    debug!(%error, "fault");
                    return Event::Fault(error);
                }
            }
        }
    }

    fn exec(&mut self, token: Token) -> Result<()> {
        use Token::*;
        match token {
            Right => self.pointer.right(),
            Left => self.pointer.left(),
            Increment => {
                let value = self.cell()?;
                self.set_cell(value.wrapping_add(1))?;
            }
            Decrement => {
                let value = self.cell()?;
                self.set_cell(value.wrapping_sub(1))?;
            }
            LoopStart => {
                if self.cell()? == 0 {
                    self.pc = self.jump()?;
                }
            }
            LoopEnd => {
                if self.cell()? != 0 {
                    self.pc = self.jump()?;
                }
            }
            Write => {
                let value = self.cell()?;
                self.output.write(self.register, value);
            }
            Read => {
                let value = self.input.read(self.register);
                self.set_cell(value)?;
            }
            Jump => {
                let offset = self.cell()?;
                self.pointer.jump(offset);
            }
            Load => self.register = self.cell()?,
            Store => {
                let value = self.register;
                self.set_cell(value)?;
            }
            Rotate => {
                let value = self.cell()?;
                self.set_cell(value.rotate_right(self.config.rotate()))?;
            }
            Nand => {
                let value = self.cell()?;
                self.set_cell(!(value & self.register))?;
            }
            Page => {
                let page = self.cell()?;
                self.pointer.switch_page(page);
            }
            NextPage => self.pointer.next_page(),
            PrevPage => self.pointer.prev_page(),
        }
        Ok(())
    }

    fn check_page(&self) -> Result<()> {
        let page = self.pointer.page;
        let max_pages = self.config.max_pages();
        if u32::from(page) >= max_pages {
            let msg = format!("page {} is outside the {} page limit", page, max_pages);
            return Err(error!(InvalidPage, self.pc; &msg));
        }
        Ok(())
    }

    fn cell(&self) -> Result<u16> {
        self.check_page()?;
        Ok(self.memory.read(self.pointer.page, self.pointer.offset))
    }

    fn set_cell(&mut self, value: u16) -> Result<()> {
        self.check_page()?;
        self.memory
            .write(self.pointer.page, self.pointer.offset, value);
        Ok(())
    }

    fn jump(&self) -> Result<Address> {
        match self.program.jump(self.pc) {
            Some(addr) => Ok(addr),
            None => Err(error!(InternalError, self.pc; "bracket has no jump target")),
        }
    }

    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    pub fn register(&self) -> u16 {
        self.register
    }

    pub fn set_register(&mut self, value: u16) {
        self.register = value;
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn input(&self) -> &InputTape {
        &self.input
    }

    pub fn output(&self) -> &OutputTape {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputTape {
        &mut self.output
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Instructions executed since construction or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            len: self.program.len(),
            pointer: self.pointer,
            register: self.register,
            cell: self.memory.read(self.pointer.page, self.pointer.offset),
            pages: self.memory.pages(),
            steps: self.steps,
        }
    }
}
