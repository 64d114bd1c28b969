use model::{BinaryOp, ComparisonOp, Expr, NumberKind, TokenKind, UnaryOp};

use crate::error::ParseError;
use crate::parser::Parser;

/// Expression parsing functionality using precedence climbing
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, ParseError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| p.parse_comparison())
    }
}

impl<'a> Parser<'a> {
    /// expression := additive (cmpOp additive)*
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = comparison_op(self.current().kind) {
            self.eat(self.current().kind)?;
            let right = self.parse_additive()?;
            left = Expr::Comparison {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }
}

fn comparison_op(kind: TokenKind) -> Option<ComparisonOp> {
    match kind {
        TokenKind::EqualEqual => Some(ComparisonOp::EqualEqual),
        TokenKind::NotEqual => Some(ComparisonOp::NotEqual),
        TokenKind::Less => Some(ComparisonOp::Less),
        TokenKind::LessEqual => Some(ComparisonOp::LessEqual),
        TokenKind::Greater => Some(ComparisonOp::Greater),
        TokenKind::GreaterEqual => Some(ComparisonOp::GreaterEqual),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Mul => Some(BinaryOp::Mul),
        TokenKind::Div => Some(BinaryOp::Div),
        TokenKind::Modulo => Some(BinaryOp::Mod),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = additive_op(self.current().kind) {
            self.eat(self.current().kind)?;
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = multiplicative_op(self.current().kind) {
            self.eat(self.current().kind)?;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current().kind {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Negate,
            _ => return self.parse_atom(),
        };
        self.eat(self.current().kind)?;
        let operand = self.nested(|p| p.parse_unary())?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    /// atom := INTEGER | FLOAT | STRING | TRUE | FALSE | call | methodCall | NAME
    ///       | array | ( expression )
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Integer | TokenKind::Float => {
                self.eat(token.kind)?;
                let kind = if token.kind == TokenKind::Float {
                    NumberKind::Float
                } else {
                    NumberKind::Int
                };
                Ok(Expr::Number {
                    kind,
                    raw: token.lexeme.clone(),
                })
            }
            TokenKind::String => {
                self.eat(TokenKind::String)?;
                Ok(Expr::Str(unquote(&token.lexeme).to_string()))
            }
            TokenKind::True => {
                self.eat(TokenKind::True)?;
                Ok(Expr::Bool(true))
            }
            TokenKind::False => {
                self.eat(TokenKind::False)?;
                Ok(Expr::Bool(false))
            }
            TokenKind::Name if self.peek_kind(1) == TokenKind::LParen => self.parse_call(),
            TokenKind::Name if self.peek_kind(1) == TokenKind::Dot => self.parse_method_call(),
            TokenKind::Name => {
                self.eat(TokenKind::Name)?;
                Ok(Expr::Variable(token.lexeme.clone()))
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBracket => {
                self.eat(TokenKind::LBracket)?;
                let elements = self.parse_expr_list(TokenKind::RBracket)?;
                self.eat(TokenKind::RBracket)?;
                Ok(Expr::Array(elements))
            }
            TokenKind::EndOfInput
            | TokenKind::Comment
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Return
            | TokenKind::FunctionDecl
            | TokenKind::Var
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::RBracket
            | TokenKind::SingleQuote
            | TokenKind::Quote
            | TokenKind::Modulo
            | TokenKind::Caret
            | TokenKind::Bang
            | TokenKind::NotEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::Equals
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Dot => Err(self.unexpected()),
        }
    }

    /// call := NAME LPAREN args RPAREN
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let name = self.eat(TokenKind::Name)?.lexeme.clone();
        self.eat(TokenKind::LParen)?;
        let args = self.parse_expr_list(TokenKind::RParen)?;
        self.eat(TokenKind::RParen)?;
        Ok(Expr::Call { name, args })
    }

    /// methodCall := NAME DOT NAME LPAREN args RPAREN
    fn parse_method_call(&mut self) -> Result<Expr, ParseError> {
        let receiver = Expr::Variable(self.eat(TokenKind::Name)?.lexeme.clone());
        self.eat(TokenKind::Dot)?;
        let method = self.eat(TokenKind::Name)?.lexeme.clone();
        self.eat(TokenKind::LParen)?;
        let args = self.parse_expr_list(TokenKind::RParen)?;
        self.eat(TokenKind::RParen)?;
        Ok(Expr::MethodCall {
            receiver: Box::new(receiver),
            method,
            args,
        })
    }

    /// (expression (COMMA expression)*)? up to, not including, `close`
    fn parse_expr_list(&mut self, close: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.check(close) {
            return Ok(items);
        }
        items.push(self.parse_expr()?);
        while self.match_token(TokenKind::Comma)? {
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }
}

/// Text between the surrounding quotes of a string lexeme.
fn unquote(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme)
}
