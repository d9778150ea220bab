use thiserror::Error;

/// Position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexer error types
///
/// Lexical errors never stop the scanner: the offending character is
/// dropped and scanning resumes right after it. Line breaks are not
/// whitespace in this language and are reported here too.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Illegal character {0:?} at {1}")]
    IllegalCharacter(char, Position),
}

impl LexerError {
    pub fn position(&self) -> Position {
        match self {
            LexerError::IllegalCharacter(_, pos) => *pos,
        }
    }
}
