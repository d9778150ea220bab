use crate::lexer::{tokenize, LexerError, TokenKind};
use crate::parser::expressions::Parser;
use crate::parser::{Node, ParseFailure, ParserError};
use log::debug;

impl Parser {
    /// Parse a whole program: exactly one block followed by end of input
    pub fn parse_program(&mut self) -> Result<Node, ParserError> {
        let block = self.parse_block()?;

        if !self.is_at_end() {
            return Err(self.error_here("end of input"));
        }

        debug!("parsed program with {} statements", block.children().len());
        Ok(block)
    }

    /// Parse a block { ... }
    pub(crate) fn parse_block(&mut self) -> Result<Node, ParserError> {
        self.expect(TokenKind::OpenBrace)?;

        let mut statements = Vec::new();

        while !self.check(TokenKind::CloseBrace) {
            if self.is_at_end() {
                return Err(self.error_here(&TokenKind::CloseBrace.describe()));
            }
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::CloseBrace)?;

        Ok(Node::block(statements))
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParserError> {
        let is_assignment = self.check(TokenKind::Identifier)
            && self
                .peek_ahead(1)
                .is_some_and(|next| next.kind == TokenKind::Assign);

        if is_assignment {
            self.parse_assignment_statement()
        } else {
            self.parse_expression_statement()
        }
    }

    /// Parse `name = expression;`
    fn parse_assignment_statement(&mut self) -> Result<Node, ParserError> {
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();
        self.expect(TokenKind::Assign)?;

        let value = self.parse_expression()?;

        self.expect(TokenKind::Semicolon)?;

        Ok(Node::assign(Node::ident(name), value))
    }

    /// Parse `expression;`, yielding the expression node itself
    fn parse_expression_statement(&mut self) -> Result<Node, ParserError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(expr)
    }
}

/// A successful parse and the lexical errors recovered along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub root: Node,
    pub lex_errors: Vec<LexerError>,
}

/// Tokenize and parse `source` in one go.
///
/// Illegal characters are dropped by the scanner and reported alongside
/// the result; the first syntax error aborts the parse.
pub fn parse_source(source: &str) -> Result<Parsed, ParseFailure> {
    let (tokens, lex_errors) = tokenize(source);

    let mut parser = Parser::new(tokens);
    match parser.parse_program() {
        Ok(root) => Ok(Parsed { root, lex_errors }),
        Err(error) => Err(ParseFailure { error, lex_errors }),
    }
}
