mod error;
mod rules;
mod scanner;
#[cfg(test)]
mod regressions;

use model::Token;

pub use error::LexError;
pub use rules::{DEFAULT_RULES, Rules};
pub use scanner::Lexer;

/// Main lexer entry point using the standard rule table
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize()
}

/// Same as [`lex`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lex(source)
}
