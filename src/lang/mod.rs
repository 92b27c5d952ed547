/*!
# Rust Language Module

This Rust module provides lexical analysis of augmented BrainFuck
and the error type shared by the loader and the machine.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Token;

#[cfg(test)]
mod tests;
