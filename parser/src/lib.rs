// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token cursor and top-level program rule
// - statements.rs: Statement parsing (var, return, if, while, mkfunc, blocks)
// - expressions.rs: Expression parsing with precedence climbing
// - error.rs: Parse error type

mod error;
mod expressions;
mod parser;
mod statements;

use lexer::LexError;
use model::{Program, Token};
use parser::Parser;
use thiserror::Error;

pub use error::ParseError;
pub use parser::MAX_NESTING;

/// Failure from either front-end stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer, terminated by an end-of-input token
///
/// # Returns
/// * `Ok(Program)` - Top-level statements in source order
/// * `Err(ParseError)` - The first grammar violation; no partial tree is returned
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens)?;
    parser.parse_program()
}

/// Same as [`parse_tokens`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_tokens(tokens)
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = lexer::lex(source)?;
    Ok(parse_tokens(&tokens)?)
}
