use super::{token::Token, Column};

/// Strips everything outside the instruction alphabet.
/// Each token keeps the character span it came from so
/// errors can point back into the source.
pub fn lex(s: &str) -> Vec<(Column, Token)> {
    s.chars()
        .enumerate()
        .filter_map(|(col, ch)| Token::from_char(ch).map(|t| (col..col + 1, t)))
        .collect()
}
