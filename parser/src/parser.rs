use model::{Program, Token, TokenKind};

use crate::error::ParseError;
use crate::statements::StatementParser;

/// Deepest nesting of blocks, parenthesized or bracketed expressions and
/// prefix operators accepted before parsing gives up.
pub const MAX_NESTING: usize = 64;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// `tokens` must be non-empty and contain exactly one end-of-input token,
    /// in last position.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfInput => {}
            _ => return Err(ParseError::MissingEndOfInput),
        }
        if let Some(position) = tokens[..tokens.len() - 1]
            .iter()
            .position(|t| t.kind == TokenKind::EndOfInput)
        {
            return Err(ParseError::EarlyEndOfInput { position });
        }
        Ok(Parser { tokens, pos: 0, depth: 0 })
    }

    /// program := statement* END_OF_INPUT
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::EndOfInput) {
            statements.push(self.parse_stmt()?);
        }
        self.eat(TokenKind::EndOfInput)?;
        Ok(statements)
    }

    /// The lookahead token. Positions past the end read as the final
    /// end-of-input token.
    pub(crate) fn current(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.pos.min(tokens.len() - 1)]
    }

    pub(crate) fn peek_kind(&self, offset: usize) -> TokenKind {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + offset).min(last)].kind
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consume the current token if it has the expected kind.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<&'a Token, ParseError> {
        let token = self.current();
        if token.kind != expected {
            return Err(ParseError::Expected {
                expected,
                found: token.kind,
                position: self.pos,
            });
        }
        self.pos += 1;
        Ok(token)
    }

    /// Eat `kind` if it is next; report whether anything was consumed.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.eat(kind)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Run a rule one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position: self.pos,
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            found: token.kind,
            lexeme: token.lexeme.clone(),
            position: self.pos,
        }
    }
}
