use std::num::{ParseFloatError, ParseIntError};
use std::{io, result};

use thiserror::Error;

use crate::compiler::ast::{BinOp, UnOp};
use crate::compiler::token::{Location, TokenKind};
use crate::value::ValueType;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Enum representing any fatal harness error.
///
/// None of these are recovered from: the first one aborts the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no script engine registered under {name:?}")]
    EngineResolution { name: String },
    #[error("cannot read script {path:?}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("compile error in {path}")]
    Compile {
        path: String,
        #[source]
        source: SyntaxError,
    },
    #[error("evaluation error in {path}")]
    Evaluation {
        path: String,
        #[source]
        source: RuntimeError,
    },
    #[error("cannot write result")]
    Output(#[source] io::Error),
}

/// Kind of SyntaxError.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    // lexer error
    #[error("unexpected character {found:?} at {location}")]
    UnexpectedChar { found: char, location: Location },
    #[error("unterminated string starting at {location}")]
    UnterminatedString { location: Location },
    #[error("invalid escape '\\{escape}' at {location}")]
    InvalidEscape { escape: char, location: Location },
    #[error("parse int error ({source}) at {location}")]
    ParseInt {
        source: ParseIntError,
        location: Location,
    },
    #[error("parse float error ({source}) at {location}")]
    ParseFloat {
        source: ParseFloatError,
        location: Location,
    },

    // parser error
    #[error("unexpected token {found} at {location} (expected {expected})")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
        location: Location,
    },
    #[error("unexpected end of input (expected {expected})")]
    UnexpectedEof { expected: &'static str },
    #[error("cannot assign to this expression at {location}")]
    InvalidAssignTarget { location: Location },
}

/// Kind of RuntimeError.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("name {name:?} is not defined")]
    UnboundName { name: String },
    #[error("{value_type} value is not callable")]
    NotCallable { value_type: ValueType },
    #[error("{name}() takes {required} arguments, but {given} were given")]
    Arity {
        name: &'static str,
        required: usize,
        given: usize,
    },
    #[error("unsupported operand type for {operator}: {operand}")]
    UnaryOperator { operator: UnOp, operand: ValueType },
    #[error("unsupported operand types for {operator}: {} and {}", .operand.0, .operand.1)]
    BinaryOperator {
        operator: BinOp,
        operand: (ValueType, ValueType),
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("convert error (from {from} to {to})")]
    Convert { from: ValueType, to: ValueType },
    #[error("compiled unit was produced by a different engine")]
    ForeignUnit,
}
