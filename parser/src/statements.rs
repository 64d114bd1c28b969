use model::{Block, Stmt, TokenKind};

use crate::error::ParseError;
use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError>;
    fn parse_block(&mut self) -> Result<Block, ParseError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let stmt = match self.current().kind {
            TokenKind::Var => self.parse_var_decl()?,
            TokenKind::Return => self.parse_return_stmt()?,
            TokenKind::If => self.parse_if_stmt()?,
            TokenKind::While => self.parse_while_stmt()?,
            TokenKind::FunctionDecl => self.parse_function_decl()?,
            TokenKind::LBrace => Stmt::Block(self.parse_block()?),
            TokenKind::Name if self.peek_kind(1) == TokenKind::Equals => self.parse_assignment()?,
            _ => Stmt::Expr(self.parse_expr()?),
        };

        // Optional terminator
        self.match_token(TokenKind::Semicolon)?;
        Ok(stmt)
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.nested(|p| p.parse_block_body())
    }
}

impl<'a> Parser<'a> {
    fn parse_block_body(&mut self) -> Result<Block, ParseError> {
        self.eat(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::EndOfInput) {
            statements.push(self.parse_stmt()?);
        }
        self.eat(TokenKind::RBrace)?;
        Ok(Block { statements })
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::Var)?;
        let name = self.eat(TokenKind::Name)?.lexeme.clone();
        self.eat(TokenKind::Equals)?;
        let value = self.parse_expr()?;
        Ok(Stmt::VarDecl { name, value })
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.eat(TokenKind::Name)?.lexeme.clone();
        self.eat(TokenKind::Equals)?;
        let value = self.parse_expr()?;
        Ok(Stmt::Assign { name, value })
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::Return)?;
        Ok(Stmt::Return(self.parse_expr()?))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::If)?;
        let cond = self.parse_expr()?;
        let then_block = self.parse_block()?;
        let else_block = if self.match_token(TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::While)?;
        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::FunctionDecl)?;
        let name = self.eat(TokenKind::Name)?.lexeme.clone();
        self.eat(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.eat(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Stmt::FunctionDecl { name, params, body })
    }

    /// params := ε | NAME (COMMA NAME)*
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }
        params.push(self.eat(TokenKind::Name)?.lexeme.clone());
        while self.match_token(TokenKind::Comma)? {
            params.push(self.eat(TokenKind::Name)?.lexeme.clone());
        }
        Ok(params)
    }
}
