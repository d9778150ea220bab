//! blocktree
//!
//! Front end for a small brace-delimited language of assignments and
//! arithmetic expressions: scanner, recursive-descent parser, syntax tree,
//! and Graphviz DOT export of the tree.

pub mod lexer;
pub mod parser;
pub mod graph;

pub use lexer::{tokenize, LexerError, Position, Scanner, Token, TokenKind};
pub use parser::{
    parse_source, BinaryOp, Node, NodeKind, ParseFailure, Parsed, Parser, ParserError,
    MAX_NESTING_DEPTH,
};
pub use graph::{graph_lines, render_digraph, render_lines, serialize, GraphError, GraphLine};
