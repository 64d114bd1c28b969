use std::fmt;

/// Token categories produced by the lexer. Matching priority lives in the
/// lexer's rule table, not in the order of these variants.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Comment,
    Integer,
    Float,
    String,
    // Keywords
    True,
    False,
    If,
    Else,
    While,
    Return,
    FunctionDecl, // mkfunc
    Var,
    Name,
    // Punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    SingleQuote,
    Quote,
    // Operators
    Modulo,
    Caret,
    Bang,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    EqualEqual,
    Equals,
    Plus,
    Minus,
    Mul,
    Div,
    Dot,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::FunctionDecl => "FUNCTION_DECL",
            TokenKind::Var => "VAR",
            TokenKind::Name => "NAME",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::SingleQuote => "SINGLE_QUOTE",
            TokenKind::Quote => "QUOTE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Caret => "CARET",
            TokenKind::Bang => "BANG",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Dot => "DOT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexeme tagged with its kind. Equality is structural over both fields.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {:?})", self.kind, self.lexeme)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberKind {
    Int,
    Float,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComparisonOp {
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Not,
    Negate,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    /// Numeric literal kept as its source text; conversion is left to evaluation.
    Number { kind: NumberKind, raw: String },
    Str(String),
    Bool(bool),
    Variable(String),
    Call {
        name: String,
        args: Vec<Expr>,
    },
    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    Array(Vec<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Comparison {
        left: Box<Expr>,
        op: ComparisonOp,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn int(raw: impl Into<String>) -> Self {
        Expr::Number {
            kind: NumberKind::Int,
            raw: raw.into(),
        }
    }

    pub fn float(raw: impl Into<String>) -> Self {
        Expr::Number {
            kind: NumberKind::Float,
            raw: raw.into(),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Expr(Expr),
    VarDecl {
        name: String,
        value: Expr,
    },
    /// Rebinding of an existing name (`name = value`).
    Assign {
        name: String,
        value: Expr,
    },
    Return(Expr),
    Block(Block),
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    While {
        cond: Expr,
        body: Block,
    },
    FunctionDecl {
        name: String,
        params: Vec<String>,
        body: Block,
    },
}

/// Top-level statements in source order.
pub type Program = Vec<Stmt>;
