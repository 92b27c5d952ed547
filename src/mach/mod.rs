/*!
## Rust Machine Module

This Rust module is a virtual machine for augmented BrainFuck with
16-bit cells, sparse paged memory, a register, and a pair of
register-addressed peripheral tapes.

*/

pub type Address = usize;

mod config;
mod link;
mod memory;
mod pointer;
mod program;
mod runtime;
mod tape;

pub use config::Config;
pub use link::Link;
pub use memory::Memory;
pub use memory::Page;
pub use memory::PAGE_SIZE;
pub use pointer::Pointer;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::Snapshot;
pub use tape::InputTape;
pub use tape::OutputTape;

#[cfg(test)]
mod tests;
