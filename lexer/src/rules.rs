use std::sync::LazyLock;

use model::TokenKind;
use regex_lite::Regex;

/// Token patterns in matching priority. Earlier entries shadow later ones, so
/// floats precede integers, keywords precede names and two-character
/// operators precede their one-character prefixes.
pub const DEFAULT_RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"#[^\n]*"),
    (TokenKind::Float, r"\d+\.\d+"),
    (TokenKind::Integer, r"\d+"),
    (TokenKind::True, r"true\b"),
    (TokenKind::False, r"false\b"),
    (TokenKind::String, r#""[^"\n]*""#),
    (TokenKind::Else, r"else\b"),
    (TokenKind::While, r"while\b"),
    (TokenKind::Return, r"return\b"),
    (TokenKind::FunctionDecl, r"mkfunc\b"),
    (TokenKind::Var, r"var\b"),
    (TokenKind::If, r"if\b"),
    (TokenKind::Comma, r","),
    (TokenKind::NotEqual, r"!="),
    (TokenKind::Bang, r"!"),
    (TokenKind::Semicolon, r";"),
    (TokenKind::LParen, r"\("),
    (TokenKind::RParen, r"\)"),
    (TokenKind::LBrace, r"\{"),
    (TokenKind::RBrace, r"\}"),
    (TokenKind::LBracket, r"\["),
    (TokenKind::RBracket, r"\]"),
    (TokenKind::SingleQuote, r"'"),
    (TokenKind::Quote, r#"""#),
    (TokenKind::Modulo, r"%"),
    (TokenKind::Caret, r"\^"),
    (TokenKind::LessEqual, r"<="),
    (TokenKind::GreaterEqual, r">="),
    (TokenKind::Less, r"<"),
    (TokenKind::Greater, r">"),
    (TokenKind::EqualEqual, r"=="),
    (TokenKind::Equals, r"="),
    (TokenKind::Plus, r"\+"),
    (TokenKind::Minus, r"-"),
    (TokenKind::Mul, r"\*"),
    (TokenKind::Div, r"/"),
    (TokenKind::Dot, r"\."),
    (TokenKind::Name, r"[a-zA-Z_][a-zA-Z0-9_]*"),
];

static DEFAULT: LazyLock<Rules> = LazyLock::new(|| {
    Rules::new(DEFAULT_RULES).expect("built-in token patterns should compile")
});

struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

/// Compiled, ordered token rules. Immutable once built.
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Compile `table` in order. Each pattern is anchored to the start of the
    /// remaining input.
    pub fn new(table: &[(TokenKind, &str)]) -> Result<Self, regex_lite::Error> {
        let rules = table
            .iter()
            .map(|&(kind, pattern)| {
                Regex::new(&format!("^(?:{pattern})")).map(|pattern| Rule { kind, pattern })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rules { rules })
    }

    /// The shared rule set for the language.
    pub fn standard() -> &'static Rules {
        &DEFAULT
    }

    /// First rule in priority order that matches a non-empty prefix of `rest`,
    /// with the length of that prefix in bytes.
    pub fn match_prefix(&self, rest: &str) -> Option<(TokenKind, usize)> {
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .find(rest)
                .filter(|m| m.start() == 0 && m.end() > 0)
                .map(|m| (rule.kind, m.end()))
        })
    }

    #[cfg(test)]
    pub(crate) fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.rules.iter().map(|rule| rule.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_wins_over_integer() {
        assert_eq!(Rules::standard().match_prefix("12.5 + 1"), Some((TokenKind::Float, 4)));
        assert_eq!(Rules::standard().match_prefix("12 + 1"), Some((TokenKind::Integer, 2)));
    }

    #[test]
    fn keyword_needs_word_boundary() {
        assert_eq!(Rules::standard().match_prefix("while x"), Some((TokenKind::While, 5)));
        assert_eq!(Rules::standard().match_prefix("whilex"), Some((TokenKind::Name, 6)));
        assert_eq!(Rules::standard().match_prefix("if("), Some((TokenKind::If, 2)));
    }

    #[test]
    fn two_char_operators_win() {
        for (src, kind) in [
            ("==", TokenKind::EqualEqual),
            ("!=", TokenKind::NotEqual),
            ("<=", TokenKind::LessEqual),
            (">=", TokenKind::GreaterEqual),
        ] {
            assert_eq!(Rules::standard().match_prefix(src), Some((kind, 2)), "{src}");
        }
    }

    #[test]
    fn patterns_are_anchored() {
        assert_eq!(Rules::standard().match_prefix("@abc"), None);
    }

    #[test]
    fn empty_matches_are_skipped() {
        let rules = Rules::new(&[(TokenKind::Comment, r"x*"), (TokenKind::Name, r"[a-z]+")]).unwrap();
        assert_eq!(rules.match_prefix("abc"), Some((TokenKind::Name, 3)));
        assert_eq!(rules.match_prefix("xxa"), Some((TokenKind::Comment, 2)));
    }

    #[test]
    fn every_kind_but_end_of_input_has_a_rule() {
        let kinds: Vec<_> = Rules::standard().kinds().collect();
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert!(!kinds.contains(&TokenKind::EndOfInput));
        assert_eq!(unique.len(), kinds.len());
        assert_eq!(kinds.len(), 38);
        assert_eq!(kinds.last(), Some(&TokenKind::Name));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(Rules::new(&[(TokenKind::Name, r"(")]).is_err());
    }
}
