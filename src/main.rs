//! # bfvm
//!
//! Command line driver for the augmented BrainFuck virtual machine.
//!

fn main() {
    bfvm::term::main()
}
