//! The glue lexer.

use std::str::Chars;

use crate::compiler::token::{
    Location, Token,
    TokenKind::{self, *},
};
use crate::errors::SyntaxError;

const EOF_CHAR: char = '\0';

/// Peekable iterator over a char sequence.
///
/// Next characters can be peeked via `first` method,
/// and position can be shifted forward via `bump` method.
struct Cursor<'a> {
    /// The input string.
    input: &'a str,
    /// Iterator over chars. Slightly faster than a &str.
    chars: Chars<'a>,
    lineno: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Cursor<'a> {
        Cursor {
            input,
            chars: input.chars(),
            lineno: 1,
            column: 1,
        }
    }

    /// Peeks the next symbol from the input stream without consuming it.
    /// If the requested position doesn't exist, `EOF_CHAR` is returned.
    fn first(&self) -> char {
        // `.next()` optimizes better than `.nth(0)`
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Peeks the second symbol from the input stream without consuming it.
    fn second(&self) -> char {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().unwrap_or(EOF_CHAR)
    }

    /// Checks if there is nothing more to consume.
    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Moves to the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.lineno += 1;
            self.column = 0;
        }
        self.column += 1;
        Some(c)
    }

    /// Gets the current location.
    fn location(&self) -> Location {
        Location {
            lineno: self.lineno,
            column: self.column,
            offset: u32::try_from(self.input.len() - self.chars.as_str().len())
                .unwrap_or(u32::MAX),
        }
    }

    /// Eats symbols while predicate returns true or until the end of file is reached.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}

/// True if `c` is considered a whitespace other than a line break.
fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | ' ' | '\u{000B}' | '\u{000C}')
}

fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}

/// Turns the input string into a token list.
///
/// Whitespace and `#` line comments are dropped; line breaks survive as
/// [`TokenKind::Eol`] tokens because they separate statements.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut cursor = Cursor::new(input);
    let mut tokens = Vec::new();
    while !cursor.is_eof() {
        if let Some(token) = cursor.advance_token()? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

impl Cursor<'_> {
    /// Lexes the next token, or `None` for trivia (whitespace, comments).
    fn advance_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        let start = self.location();
        let Some(c) = self.bump() else {
            return Ok(None);
        };
        let kind = match c {
            c if is_whitespace(c) => {
                self.eat_while(is_whitespace);
                return Ok(None);
            }
            '#' => {
                self.eat_while(|c| c != '\n');
                return Ok(None);
            }
            '\n' => Eol,
            ',' => Comma,
            ';' => Semi,
            '(' => OpenParen,
            ')' => CloseParen,
            '+' => Add,
            '-' => Sub,
            '*' => Mul,
            '/' => Div,
            '%' => Mod,
            '=' => {
                if self.first() == '=' {
                    self.bump();
                    Eq
                } else {
                    Assign
                }
            }
            '!' if self.first() == '=' => {
                self.bump();
                NotEq
            }
            '<' => {
                if self.first() == '=' {
                    self.bump();
                    LtEq
                } else {
                    Lt
                }
            }
            '>' => {
                if self.first() == '=' {
                    self.bump();
                    GtEq
                } else {
                    Gt
                }
            }
            '"' => self.string(start)?,
            c if c.is_ascii_digit() => self.number(start)?,
            c if is_ident_start(c) => self.ident(start),
            found => {
                return Err(SyntaxError::UnexpectedChar {
                    found,
                    location: start,
                })
            }
        };
        Ok(Some(Token::new(kind, start, self.location())))
    }

    fn ident(&mut self, start: Location) -> TokenKind {
        self.eat_while(is_ident_continue);
        let text = &self.input[start.offset as usize..self.location().offset as usize];
        match text {
            "null" => Null,
            "true" => True,
            "false" => False,
            "not" => Not,
            "and" => And,
            "or" => Or,
            _ => Ident(text.to_string()),
        }
    }

    fn number(&mut self, start: Location) -> Result<TokenKind, SyntaxError> {
        self.eat_while(|c| c.is_ascii_digit());
        let mut is_float = false;
        if self.first() == '.' && self.second().is_ascii_digit() {
            is_float = true;
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }
        if matches!(self.first(), 'e' | 'E')
            && (self.second().is_ascii_digit()
                || (matches!(self.second(), '+' | '-') && !self.is_eof()))
        {
            is_float = true;
            self.bump();
            if matches!(self.first(), '+' | '-') {
                self.bump();
            }
            self.eat_while(|c| c.is_ascii_digit());
        }
        let text = &self.input[start.offset as usize..self.location().offset as usize];
        if is_float {
            text.parse()
                .map(Float)
                .map_err(|source| SyntaxError::ParseFloat {
                    source,
                    location: start,
                })
        } else {
            text.parse()
                .map(Int)
                .map_err(|source| SyntaxError::ParseInt {
                    source,
                    location: start,
                })
        }
    }

    fn string(&mut self, start: Location) -> Result<TokenKind, SyntaxError> {
        let mut value = String::new();
        loop {
            let location = self.location();
            match self.bump() {
                Some('"') => break,
                Some('\\') => {
                    let escape = self.bump().ok_or(SyntaxError::UnterminatedString {
                        location: start,
                    })?;
                    value.push(match escape {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        '\\' => '\\',
                        '"' => '"',
                        escape => return Err(SyntaxError::InvalidEscape { escape, location }),
                    });
                }
                Some('\n') | None => {
                    return Err(SyntaxError::UnterminatedString { location: start })
                }
                Some(c) => value.push(c),
            }
        }
        Ok(Str(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenize_expression() {
        assert_eq!(
            kinds("x = 1 + 2.5"),
            vec![
                Ident("x".to_string()),
                Assign,
                Int(1),
                Add,
                Float(2.5),
            ]
        );
    }

    #[test]
    fn tokenize_keywords_and_comparisons() {
        assert_eq!(
            kinds("a <= b and not false"),
            vec![
                Ident("a".to_string()),
                LtEq,
                Ident("b".to_string()),
                And,
                Not,
                False,
            ]
        );
    }

    #[test]
    fn tokenize_string_escapes() {
        assert_eq!(
            kinds(r#""a\tb\n""#),
            vec![Str("a\tb\n".to_string())]
        );
    }

    #[test]
    fn comments_and_whitespace_are_trivia() {
        assert_eq!(kinds("1 # one\n2"), vec![Int(1), Eol, Int(2)]);
    }

    #[test]
    fn unterminated_string_errors() {
        let err = tokenize("\"abc").unwrap_err();
        assert!(matches!(err, SyntaxError::UnterminatedString { .. }));
    }

    #[test]
    fn unknown_char_errors() {
        let err = tokenize("1 ` 2").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::UnexpectedChar { found: '`', .. }
        ));
    }

    #[test]
    fn locations_track_lines() {
        let tokens = tokenize("1\n  x").unwrap();
        let x = tokens.last().unwrap();
        assert_eq!((x.start.lineno, x.start.column), (2, 3));
    }
}
