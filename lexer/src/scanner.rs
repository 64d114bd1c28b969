use model::{Token, TokenKind};

use crate::error::LexError;
use crate::rules::Rules;

/// Rule-driven scanner over one source string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    rules: &'a Rules,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_rules(input, Rules::standard())
    }

    pub fn with_rules(input: &'a str, rules: &'a Rules) -> Self {
        Self { input, pos: 0, rules }
    }

    /// Scan the whole input. Comments are matched but not emitted; the result
    /// always ends with a single end-of-input token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            match self.next_token()? {
                Some(token) if token.kind == TokenKind::EndOfInput => {
                    tokens.push(token);
                    return Ok(tokens);
                }
                Some(token) => tokens.push(token),
                None => continue, // comment consumed
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Some(Token::end_of_input()));
        };

        let rest = &self.input[self.pos..];
        let Some((kind, len)) = self.rules.match_prefix(rest) else {
            return Err(LexError::unexpected_char(self.input, self.pos, ch));
        };

        let lexeme = &rest[..len];
        self.pos += len;

        if kind == TokenKind::Comment {
            return Ok(None);
        }
        Ok(Some(Token::new(kind, lexeme)))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn scanner_basic() {
        let mut lexer = Lexer::new("var x = 123");
        let tokens = lexer.tokenize().expect("Should tokenize");

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Var,
                TokenKind::Name,
                TokenKind::Equals,
                TokenKind::Integer,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(tokens[3].lexeme, "123");
    }

    #[test]
    fn scanner_skips_comments() {
        let mut lexer = Lexer::new("var x = 1 # trailing\n# whole line\nx");
        let tokens = lexer.tokenize().expect("Should tokenize");

        assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn scanner_comment_at_end_of_input() {
        let mut lexer = Lexer::new("# nothing else");
        let tokens = lexer.tokenize().expect("Should tokenize");
        assert_eq!(tokens, vec![Token::end_of_input()]);
    }

    #[test]
    fn scanner_custom_rules() {
        let rules = Rules::new(&[(TokenKind::Integer, r"[01]+"), (TokenKind::Plus, r"\+")]).unwrap();
        let mut lexer = Lexer::with_rules("10 + 2", &rules);
        let err = lexer.tokenize().unwrap_err();
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn scanner_error_reports_line_and_column() {
        let mut lexer = Lexer::new("var a = 1\n  a @ 2");
        let err = lexer.tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar { ch: '@', offset: 14, line: 2, column: 5 }
        );
    }

    #[test]
    fn scanner_non_ascii_is_rejected() {
        let mut lexer = Lexer::new("var é = 1");
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: 'é', offset: 4, .. }));
    }
}
