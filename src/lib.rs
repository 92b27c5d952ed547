//! # bfvm
//!
//! A virtual machine for an augmented BrainFuck. Cells are 16 bits wide and
//! live in up to 65536 pages of 65536 cells. A register addresses two
//! peripheral tapes: one read-only for input and one write-only for output.
//!
//! Run a program file with `bfvm program.bf`, or start `bfvm` with no
//! arguments to type instructions interactively.
//!
//! ```
//! use bfvm::mach::Runtime;
//!
//! let mut runtime = Runtime::load("++>+++[-<+>]").unwrap();
//! runtime.run().unwrap();
//! assert_eq!(runtime.memory().read(0, 0), 5);
//! ```

#[path = "doc/instruction_set.rs"]
#[allow(non_snake_case)]
pub mod _Instruction_Set;

pub mod lang;
pub mod mach;
pub mod term;
