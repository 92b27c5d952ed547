use super::Address;
use crate::error;
use crate::lang::{Column, Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// ## Bracket jump table
///
/// Built once when a program is loaded. Every `[` maps to its `]`
/// and every `]` back to its `[`, so loops never rescan the program.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    targets: Vec<Option<Address>>,
}

impl Link {
    pub fn new(tokens: &[(Column, Token)]) -> Result<Link> {
        let mut targets: Vec<Option<Address>> = vec![None; tokens.len()];
        let mut pending: Vec<Address> = vec![];
        for (addr, (col, token)) in tokens.iter().enumerate() {
            match token {
                Token::LoopStart => pending.push(addr),
                Token::LoopEnd => match pending.pop() {
                    Some(open) => {
                        targets[open] = Some(addr);
                        targets[addr] = Some(open);
                    }
                    None => return Err(error!(UnbalancedBrackets, addr, ..col; "no matching [")),
                },
                _ => {}
            }
        }
        if let Some(open) = pending.pop() {
            let col = &tokens[open].0;
            return Err(error!(UnbalancedBrackets, open, ..col; "no matching ]"));
        }
        Ok(Link { targets })
    }

    /// The matching bracket for the bracket at `addr`.
    pub fn target(&self, addr: Address) -> Option<Address> {
        self.targets.get(addr).copied().flatten()
    }

    /// Every `(open, close)` pair in order of the opening bracket.
    pub fn pairs(&self) -> impl Iterator<Item = (Address, Address)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(addr, target)| match target {
                Some(close) if *close > addr => Some((addr, *close)),
                _ => None,
            })
    }
}
