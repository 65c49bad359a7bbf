//! The glue parser. Turns a token list into a [`Chunk`].

use crate::compiler::ast::*;
use crate::compiler::token::{Location, Token, TokenKind};
use crate::errors::SyntaxError;

/// Parses the token list produced by [`crate::compiler::lexer::tokenize`].
pub fn parse(tokens: Vec<Token>) -> Result<Chunk, SyntaxError> {
    Parser::new(tokens).chunk()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// The current token, if any input remains.
    fn token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn kind(&self) -> Option<&TokenKind> {
        self.token().map(|t| &t.kind)
    }

    /// Location of the current token, or of the end of input.
    fn location(&self) -> Location {
        self.token()
            .or_else(|| self.tokens.last())
            .map_or_else(Location::start, |t| t.start)
    }

    /// Moves to the next token, returning the consumed one.
    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        let is_present = self.kind() == Some(kind);
        if is_present {
            self.pos += 1;
        }
        is_present
    }

    /// Expects and consumes the token `kind`, signalling an error otherwise.
    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Token, SyntaxError> {
        if self.kind() == Some(kind) {
            Ok(self.bump().unwrap())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        match self.token() {
            Some(token) => SyntaxError::UnexpectedToken {
                found: token.kind.clone(),
                expected,
                location: token.start,
            },
            None => SyntaxError::UnexpectedEof { expected },
        }
    }

    /// Eats statement separators (line breaks and semicolons).
    fn eat_separators(&mut self) {
        while matches!(self.kind(), Some(TokenKind::Eol | TokenKind::Semi)) {
            self.pos += 1;
        }
    }

    fn chunk(&mut self) -> Result<Chunk, SyntaxError> {
        let mut body = Vec::new();
        self.eat_separators();
        while self.token().is_some() {
            body.push(self.stmt()?);
            if self.token().is_some() {
                // A statement ends at a separator or at the end of input.
                if !matches!(self.kind(), Some(TokenKind::Eol | TokenKind::Semi)) {
                    return Err(self.unexpected("end of statement"));
                }
                self.eat_separators();
            }
        }
        Ok(Chunk { body })
    }

    fn stmt(&mut self) -> Result<Stmt, SyntaxError> {
        // `name = expr` needs one token of lookahead to tell an assignment
        // from a bare identifier expression.
        if let (Some(TokenKind::Ident(_)), Some(next)) = (self.kind(), self.tokens.get(self.pos + 1))
        {
            if next.kind == TokenKind::Assign {
                let token = self.bump().unwrap();
                let TokenKind::Ident(name) = token.kind else {
                    unreachable!()
                };
                let left = Ident {
                    name,
                    start: token.start,
                    end: token.end,
                };
                self.bump();
                let right = self.expr(0)?;
                return Ok(Stmt {
                    start: left.start,
                    end: right.end,
                    kind: StmtKind::Assign {
                        left,
                        right: Box::new(right),
                    },
                });
            }
        }
        let expr = self.expr(0)?;
        if self.kind() == Some(&TokenKind::Assign) {
            return Err(SyntaxError::InvalidAssignTarget {
                location: self.location(),
            });
        }
        Ok(Stmt {
            start: expr.start,
            end: expr.end,
            kind: StmtKind::Expr(Box::new(expr)),
        })
    }

    /// Precedence-climbing binary expression parser; all operators are
    /// left-associative.
    fn expr(&mut self, min_precedence: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.unary()?;
        while let Some(operator) = self.kind().and_then(bin_op) {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            self.pos += 1;
            let right = self.expr(precedence + 1)?;
            left = Expr {
                start: left.start,
                end: right.end,
                kind: ExprKind::Binary {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            };
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        let operator = match self.kind() {
            Some(TokenKind::Sub) => Some(UnOp::Neg),
            Some(TokenKind::Not) => Some(UnOp::Not),
            _ => None,
        };
        if let Some(operator) = operator {
            let start = self.bump().unwrap().start;
            let argument = self.unary()?;
            return Ok(Expr {
                start,
                end: argument.end,
                kind: ExprKind::Unary {
                    operator,
                    argument: Box::new(argument),
                },
            });
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.primary()?;
        while self.eat(&TokenKind::OpenParen) {
            let mut arguments = Vec::new();
            if self.kind() != Some(&TokenKind::CloseParen) {
                loop {
                    arguments.push(self.expr(0)?);
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
            }
            let close = self.expect(&TokenKind::CloseParen, "')'")?;
            expr = Expr {
                start: expr.start,
                end: close.end,
                kind: ExprKind::Call {
                    callee: Box::new(expr),
                    arguments,
                },
            };
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let Some(token) = self.bump() else {
            return Err(SyntaxError::UnexpectedEof {
                expected: "expression",
            });
        };
        let (start, end) = (token.start, token.end);
        let lit = |value| {
            ExprKind::Lit(Lit { value, start, end })
        };
        let kind = match token.kind {
            TokenKind::Null => lit(LitKind::Null),
            TokenKind::True => lit(LitKind::Bool(true)),
            TokenKind::False => lit(LitKind::Bool(false)),
            TokenKind::Int(v) => lit(LitKind::Int(v)),
            TokenKind::Float(v) => lit(LitKind::Float(v)),
            TokenKind::Str(v) => lit(LitKind::Str(v)),
            TokenKind::Ident(name) => ExprKind::Ident(Ident { name, start, end }),
            TokenKind::OpenParen => {
                let inner = self.expr(0)?;
                let close = self.expect(&TokenKind::CloseParen, "')'")?;
                return Ok(Expr {
                    start,
                    end: close.end,
                    kind: inner.kind,
                });
            }
            found => {
                return Err(SyntaxError::UnexpectedToken {
                    found,
                    expected: "expression",
                    location: start,
                })
            }
        };
        Ok(Expr { kind, start, end })
    }
}

fn bin_op(kind: &TokenKind) -> Option<BinOp> {
    Some(match kind {
        TokenKind::Add => BinOp::Add,
        TokenKind::Sub => BinOp::Sub,
        TokenKind::Mul => BinOp::Mul,
        TokenKind::Div => BinOp::Div,
        TokenKind::Mod => BinOp::Mod,
        TokenKind::Eq => BinOp::Eq,
        TokenKind::NotEq => BinOp::NotEq,
        TokenKind::Lt => BinOp::Lt,
        TokenKind::LtEq => BinOp::LtEq,
        TokenKind::Gt => BinOp::Gt,
        TokenKind::GtEq => BinOp::GtEq,
        TokenKind::And => BinOp::And,
        TokenKind::Or => BinOp::Or,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Chunk, SyntaxError> {
        parse(tokenize(input).unwrap())
    }

    #[test]
    fn parse_precedence() {
        let chunk = parse_str("1 + 2 * 3").unwrap();
        let [stmt] = &chunk.body[..] else {
            panic!("expected one statement")
        };
        let StmtKind::Expr(expr) = &stmt.kind else {
            panic!("expected expression statement")
        };
        let ExprKind::Binary { operator, right, .. } = &expr.kind else {
            panic!("expected binary expression")
        };
        assert_eq!(*operator, BinOp::Add);
        assert!(matches!(
            right.kind,
            ExprKind::Binary {
                operator: BinOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn parse_assignment() {
        let chunk = parse_str("x = 1\nx + 1").unwrap();
        assert_eq!(chunk.body.len(), 2);
        assert!(matches!(chunk.body[0].kind, StmtKind::Assign { .. }));
        assert!(matches!(chunk.body[1].kind, StmtKind::Expr(_)));
    }

    #[test]
    fn parse_call_with_arguments() {
        let chunk = parse_str("len(\"abc\", 1 + 2)").unwrap();
        let StmtKind::Expr(expr) = &chunk.body[0].kind else {
            panic!("expected expression statement")
        };
        let ExprKind::Call { arguments, .. } = &expr.kind else {
            panic!("expected call")
        };
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn parse_empty_chunk() {
        let chunk = parse_str("\n\n# only a comment\n").unwrap();
        assert!(chunk.body.is_empty());
    }

    #[test]
    fn unbalanced_parens_error() {
        let err = parse_str("(1 + 2").unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEof { .. }));
    }

    #[test]
    fn trailing_operator_errors() {
        let err = parse_str("1 +").unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEof { .. }));
    }

    #[test]
    fn assign_to_literal_errors() {
        let err = parse_str("1 = 2").unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidAssignTarget { .. }));
    }
}
