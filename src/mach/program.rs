use super::{Address, Link};
use crate::lang::{lex, Column, Error, Token};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Loaded program
///
/// The instruction sequence with comments stripped, the source column of
/// each instruction, and the bracket jump table. Immutable once loaded.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    tokens: Vec<Token>,
    columns: Vec<Column>,
    link: Link,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn load(source: &str) -> Result<Program> {
        let lexed = lex(source);
        let link = Link::new(&lexed)?;
        let (columns, tokens): (Vec<Column>, Vec<Token>) = lexed.into_iter().unzip();
        let program = Program {
            tokens,
            columns,
            link,
        };
        debug!(instructions = program.len(), "program loaded");
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, addr: Address) -> Option<Token> {
        self.tokens.get(addr).copied()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn column(&self, addr: Address) -> Option<Column> {
        self.columns.get(addr).cloned()
    }

    /// Matching bracket for the `[` or `]` at `addr`.
    pub fn jump(&self, addr: Address) -> Option<Address> {
        self.link.target(addr)
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|t| t.to_char()).collect();
        write!(f, "{}", s)
    }
}
