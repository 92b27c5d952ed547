/// ## Instruction alphabet
///
/// Every instruction is a single character. Anything outside this
/// alphabet is a comment and never becomes a token.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `>` move the data pointer right within the page.
    Right,
    /// `<` move the data pointer left within the page.
    Left,
    /// `+` increment the current cell.
    Increment,
    /// `-` decrement the current cell.
    Decrement,
    /// `[` skip past the matching `]` when the current cell is zero.
    LoopStart,
    /// `]` return to the matching `[` when the current cell is not zero.
    LoopEnd,
    /// `.` write the current cell to the output tape at the register.
    Write,
    /// `,` read the input tape at the register into the current cell.
    Read,
    /// `@` jump the data pointer to the offset held in the current cell.
    Jump,
    /// `^` copy the current cell into the register.
    Load,
    /// `*` copy the register into the current cell.
    Store,
    /// `~` rotate the current cell right.
    Rotate,
    /// `&` NAND the current cell with the register.
    Nand,
    /// `#` switch to the page held in the current cell.
    Page,
    /// `}` next page.
    NextPage,
    /// `{` previous page.
    PrevPage,
}

impl Token {
    pub const ALL: [Token; 16] = [
        Token::Right,
        Token::Left,
        Token::Increment,
        Token::Decrement,
        Token::LoopStart,
        Token::LoopEnd,
        Token::Write,
        Token::Read,
        Token::Jump,
        Token::Load,
        Token::Store,
        Token::Rotate,
        Token::Nand,
        Token::Page,
        Token::NextPage,
        Token::PrevPage,
    ];

    pub fn from_char(ch: char) -> Option<Token> {
        use Token::*;
        Some(match ch {
            '>' => Right,
            '<' => Left,
            '+' => Increment,
            '-' => Decrement,
            '[' => LoopStart,
            ']' => LoopEnd,
            '.' => Write,
            ',' => Read,
            '@' => Jump,
            '^' => Load,
            '*' => Store,
            '~' => Rotate,
            '&' => Nand,
            '#' => Page,
            '}' => NextPage,
            '{' => PrevPage,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        use Token::*;
        match self {
            Right => '>',
            Left => '<',
            Increment => '+',
            Decrement => '-',
            LoopStart => '[',
            LoopEnd => ']',
            Write => '.',
            Read => ',',
            Jump => '@',
            Load => '^',
            Store => '*',
            Rotate => '~',
            Nand => '&',
            Page => '#',
            NextPage => '}',
            PrevPage => '{',
        }
    }

    pub fn is_bracket(self) -> bool {
        matches!(self, Token::LoopStart | Token::LoopEnd)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
