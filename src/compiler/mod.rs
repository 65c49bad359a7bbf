//! The glue compiler.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

use crate::errors::SyntaxError;

/// Compile glue source text into an executable chunk.
pub fn compile(input: &str) -> Result<ast::Chunk, SyntaxError> {
    let tokens = lexer::tokenize(input)?;
    parser::parse(tokens)
}
