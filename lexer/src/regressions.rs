use crate::lex;
use model::{Token, TokenKind};

#[test]
fn test_two_strings_on_one_line() {
    let tokens = lex(r#"f("a", "b")"#).expect("lexing should succeed");
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(strings, vec![r#""a""#, r#""b""#]);
}

#[test]
fn test_string_does_not_cross_lines() {
    let tokens = lex("\"a\nb\"").expect("lexing should succeed");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Quote, "\""),
            Token::new(TokenKind::Name, "a"),
            Token::new(TokenKind::Name, "b"),
            Token::new(TokenKind::Quote, "\""),
            Token::end_of_input(),
        ]
    );
}

#[test]
fn test_not_equal_is_not_bang() {
    let tokens = lex("a!=b").expect("lexing should succeed");
    assert_eq!(tokens[1], Token::new(TokenKind::NotEqual, "!="));
}

#[test]
fn test_hash_inside_string_is_not_comment() {
    let tokens = lex(r##"var s = "#1""##).expect("lexing should succeed");
    assert_eq!(tokens[3], Token::new(TokenKind::String, r##""#1""##));
}
