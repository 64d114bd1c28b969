use model::TokenKind;
use thiserror::Error;

/// Parse failures. `position` is an index into the token sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at token {position}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },

    #[error("unexpected {found} {lexeme:?} at token {position}")]
    UnexpectedToken {
        found: TokenKind,
        lexeme: String,
        position: usize,
    },

    #[error("token stream does not end with END_OF_INPUT")]
    MissingEndOfInput,

    #[error("END_OF_INPUT at token {position} is followed by more tokens")]
    EarlyEndOfInput { position: usize },

    #[error("nesting deeper than {limit} levels at token {position}")]
    NestingTooDeep { limit: usize, position: usize },
}
