use std::fmt;

use self::TokenKind::*;

/// Location of a token in the source text.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Location {
    pub lineno: u32,
    pub column: u32,
    pub offset: u32,
}

impl Location {
    pub fn start() -> Self {
        Location {
            lineno: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lineno, self.column)
    }
}

/// Enum representing common lexeme types.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Keywords:
    /// "null"
    Null,
    /// "true"
    True,
    /// "false"
    False,
    /// "not"
    Not,
    /// "and"
    And,
    /// "or"
    Or,

    // Two-char tokens:
    /// "=="
    Eq,
    /// "!="
    NotEq,
    /// "<="
    LtEq,
    /// ">="
    GtEq,

    // One-char tokens:
    /// ","
    Comma,
    /// "("
    OpenParen,
    /// ")"
    CloseParen,
    /// "="
    Assign,
    /// "<"
    Lt,
    /// ">"
    Gt,
    /// "+"
    Add,
    /// "-"
    Sub,
    /// "*"
    Mul,
    /// "/"
    Div,
    /// "%"
    Mod,
    /// ";"
    Semi,

    // Other:
    /// End of line (`\n`)
    Eol,
    /// Ident
    Ident(String),
    /// "12"
    Int(i64),
    /// "12.34", "1e-4"
    Float(f64),
    /// ""abc""
    Str(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Null => write!(f, "'null'"),
            True => write!(f, "'true'"),
            False => write!(f, "'false'"),
            Not => write!(f, "'not'"),
            And => write!(f, "'and'"),
            Or => write!(f, "'or'"),
            Eq => write!(f, "'=='"),
            NotEq => write!(f, "'!='"),
            LtEq => write!(f, "'<='"),
            GtEq => write!(f, "'>='"),
            Comma => write!(f, "','"),
            OpenParen => write!(f, "'('"),
            CloseParen => write!(f, "')'"),
            Assign => write!(f, "'='"),
            Lt => write!(f, "'<'"),
            Gt => write!(f, "'>'"),
            Add => write!(f, "'+'"),
            Sub => write!(f, "'-'"),
            Mul => write!(f, "'*'"),
            Div => write!(f, "'/'"),
            Mod => write!(f, "'%'"),
            Semi => write!(f, "';'"),
            Eol => write!(f, "end of line"),
            Ident(name) => write!(f, "identifier {name:?}"),
            Int(v) => write!(f, "int literal {v}"),
            Float(v) => write!(f, "float literal {v}"),
            Str(v) => write!(f, "string literal {v:?}"),
        }
    }
}

/// Parsed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Location,
    pub end: Location,
}

impl Token {
    pub fn new(kind: TokenKind, start: Location, end: Location) -> Self {
        Token { kind, start, end }
    }
}
