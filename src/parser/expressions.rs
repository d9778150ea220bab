use crate::lexer::{Token, TokenKind};
use crate::parser::{BinaryOp, Node, ParserError};

/// Maximum depth of nested parentheses accepted by the parser
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    /// Build a parser over a token stream. A trailing `Eof` token is added
    /// if the stream does not already end with one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let pos = tokens.last().map(|t| t.pos).unwrap_or_else(crate::lexer::Position::start);
            tokens.push(Token::new(TokenKind::Eof, pos, String::new()));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Check if we've reached the end of tokens
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Peek at current token without consuming it
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Peek ahead n tokens
    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.current + n)
    }

    /// Get previous token
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Advance to next token
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Check if current token matches a kind
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Expect a specific token kind and consume it
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParserError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(&kind.describe()))
        }
    }

    /// Syntax error for the current token
    pub(crate) fn error_here(&self, expected: &str) -> ParserError {
        let token = self.peek();
        if token.is_eof() {
            ParserError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParserError::UnexpectedToken {
                found: token.lexeme.clone(),
                expected: expected.to_string(),
                pos: token.pos,
            }
        }
    }

    /// Parse an expression
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParserError> {
        self.parse_additive()
    }

    /// Parse additive expressions (+, -)
    fn parse_additive(&mut self) -> Result<Node, ParserError> {
        self.parse_binary_expr(Self::parse_multiplicative, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// Parse multiplicative expressions (*, /)
    fn parse_multiplicative(&mut self) -> Result<Node, ParserError> {
        self.parse_binary_expr(Self::parse_factor, &[TokenKind::Asterisk, TokenKind::Slash])
    }

    /// Generic left-associative binary expression parser
    fn parse_binary_expr<F>(&mut self, next_level: F, operators: &[TokenKind]) -> Result<Node, ParserError>
    where
        F: Fn(&mut Self) -> Result<Node, ParserError>,
    {
        let mut left = next_level(self)?;

        while let Some(op) = self.match_binary_op(operators) {
            let right = next_level(self)?;
            left = Node::binary(op, left, right);
        }

        Ok(left)
    }

    /// Consume the current token if it is one of `operators`
    fn match_binary_op(&mut self, operators: &[TokenKind]) -> Option<BinaryOp> {
        let kind = self.peek().kind;
        if !operators.contains(&kind) {
            return None;
        }
        let op = match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Asterisk => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    /// Parse a number, an identifier or a parenthesized expression
    fn parse_factor(&mut self) -> Result<Node, ParserError> {
        match self.peek().kind {
            TokenKind::Number => {
                let text = self.advance().lexeme.clone();
                Ok(Node::num(text))
            }
            TokenKind::Identifier => {
                let text = self.advance().lexeme.clone();
                Ok(Node::id(text))
            }
            TokenKind::OpenParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(ParserError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                        pos: self.peek().pos,
                    });
                }
                self.advance(); // consume '('

                self.depth += 1;
                let inner = self.parse_expression();
                self.depth -= 1;
                let inner = inner?;
                self.expect(TokenKind::CloseParen)?;
                // Grouping is structural only; no node for the parentheses
                Ok(inner)
            }
            _ => Err(self.error_here("number, identifier or '('")),
        }
    }
}
