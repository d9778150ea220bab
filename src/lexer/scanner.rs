use crate::lexer::{LexerError, Position, Token, TokenKind};
use log::{debug, trace};

pub struct Scanner<'a> {
    input: &'a str,
    current: usize,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            current: 0,
            line: 1,
            column: 1,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Scan the whole input, returning every token (ending with `Eof`)
    /// together with the lexical errors that were skipped over.
    pub fn scan_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        debug!(
            "scanned {} tokens with {} lexical errors",
            tokens.len(),
            self.errors.len()
        );

        (tokens, self.errors)
    }

    /// Lexical errors reported so far
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    /// Get the next token from the input.
    ///
    /// Illegal characters are recorded and skipped one at a time, so this
    /// always produces a token; once the input is exhausted every call
    /// returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start_pos = self.current_position();
            let start_idx = self.current;

            let Some(ch) = self.advance() else {
                return Token::new(TokenKind::Eof, start_pos, String::new());
            };

            if let Some(kind) = TokenKind::from_punct(ch) {
                return Token::new(kind, start_pos, ch.to_string());
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                    self.advance();
                }
                return self.make_token(TokenKind::Identifier, start_pos, start_idx);
            }

            if ch.is_ascii_digit() {
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.advance();
                }
                return self.make_token(TokenKind::Number, start_pos, start_idx);
            }

            trace!("skipping illegal character {:?} at {}", ch, start_pos);
            self.errors.push(LexerError::IllegalCharacter(ch, start_pos));
        }
    }

    fn make_token(&self, kind: TokenKind, pos: Position, start_idx: usize) -> Token {
        Token::new(kind, pos, self.input[start_idx..self.current].to_string())
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t') = self.peek() {
            self.advance();
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to and including `Eof`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

// Convenience function for tokenizing input
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<LexerError>) {
    Scanner::new(input).scan_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_identifier_then_number_split() {
        let (tokens, errors) = tokenize("x_1 42abc");
        assert!(errors.is_empty());
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["x_1", "42", "abc", ""]);
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut scanner = Scanner::new("{");
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::OpenBrace));
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_next_token_keeps_returning_eof() {
        let mut scanner = Scanner::new("");
        assert!(scanner.next_token().is_eof());
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_illegal_multibyte_char_is_skipped_whole() {
        let mut scanner = Scanner::new("a é b");
        let tokens: Vec<_> = scanner.by_ref().map(|t| t.lexeme).collect();
        assert_eq!(tokens, vec!["a", "b", ""]);
        assert_eq!(
            scanner.errors(),
            &[LexerError::IllegalCharacter('é', Position::new(1, 3))]
        );
    }

    #[test]
    fn test_newlines_are_reported_and_advance_line() {
        let (tokens, errors) = tokenize("{\n  x\r\n}");
        assert_eq!(tokens[1].pos, Position::new(2, 3));
        assert_eq!(tokens[2].pos, Position::new(3, 1));
        assert_eq!(
            errors,
            vec![
                LexerError::IllegalCharacter('\n', Position::new(1, 2)),
                LexerError::IllegalCharacter('\r', Position::new(2, 4)),
                LexerError::IllegalCharacter('\n', Position::new(2, 5)),
            ]
        );
        assert_eq!(kinds("{\n}\n"), vec![TokenKind::OpenBrace, TokenKind::CloseBrace, TokenKind::Eof]);
    }
}
