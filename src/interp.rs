//! The glue interpreter: a tree walker over persistent globals.

use rustc_hash::FxHashMap;

use crate::compiler::ast::{BinOp, Chunk, Expr, ExprKind, LitKind, Stmt, StmtKind, UnOp};
use crate::errors::RuntimeError;
use crate::value::Value;

/// The interpreter state: the engine's global bindings.
///
/// One `Env` lives for the whole run, so bindings made by one evaluation
/// (including everything the bootstrap activation installs) are visible to
/// every later evaluation.
#[derive(Debug, Default)]
pub struct Env {
    pub globals: FxHashMap<String, Value>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }
}

/// Evaluates a chunk, yielding the value of its last expression statement.
pub fn eval_chunk(env: &mut Env, chunk: &Chunk) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;
    for stmt in &chunk.body {
        result = eval_stmt(env, stmt)?;
    }
    Ok(result)
}

fn eval_stmt(env: &mut Env, stmt: &Stmt) -> Result<Value, RuntimeError> {
    match &stmt.kind {
        StmtKind::Assign { left, right } => {
            let value = eval_expr(env, right)?;
            env.set(left.name.clone(), value);
            Ok(Value::Null)
        }
        StmtKind::Expr(expr) => eval_expr(env, expr),
    }
}

fn eval_expr(env: &mut Env, expr: &Expr) -> Result<Value, RuntimeError> {
    match &expr.kind {
        ExprKind::Lit(lit) => Ok(match &lit.value {
            LitKind::Null => Value::Null,
            LitKind::Bool(v) => Value::Bool(*v),
            LitKind::Int(v) => Value::Int(*v),
            LitKind::Float(v) => Value::Float(*v),
            LitKind::Str(v) => Value::Str(v.clone()),
        }),
        ExprKind::Ident(ident) => {
            env.get(&ident.name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnboundName {
                    name: ident.name.clone(),
                })
        }
        ExprKind::Unary { operator, argument } => {
            let value = eval_expr(env, argument)?;
            unary_op(*operator, value)
        }
        ExprKind::Binary {
            operator: operator @ (BinOp::And | BinOp::Or),
            left,
            right,
        } => {
            // Short-circuit; yields an operand, not a bool.
            let left = eval_expr(env, left)?;
            if left.is_truthy() == matches!(*operator, BinOp::And) {
                eval_expr(env, right)
            } else {
                Ok(left)
            }
        }
        ExprKind::Binary {
            operator,
            left,
            right,
        } => {
            let left = eval_expr(env, left)?;
            let right = eval_expr(env, right)?;
            binary_op(*operator, left, right)
        }
        ExprKind::Call { callee, arguments } => {
            let callee = eval_expr(env, callee)?;
            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                args.push(eval_expr(env, argument)?);
            }
            match callee {
                Value::Function(function) => (function.func)(args, env),
                value => Err(RuntimeError::NotCallable {
                    value_type: value.value_type(),
                }),
            }
        }
    }
}

fn unary_op(operator: UnOp, value: Value) -> Result<Value, RuntimeError> {
    match (operator, value) {
        (UnOp::Neg, Value::Int(v)) => Ok(Value::Int(v.wrapping_neg())),
        (UnOp::Neg, Value::Float(v)) => Ok(Value::Float(-v)),
        (UnOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (operator, value) => Err(RuntimeError::UnaryOperator {
            operator,
            operand: value.value_type(),
        }),
    }
}

fn binary_op(operator: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use BinOp::*;
    use Value::*;
    match (operator, left, right) {
        (Add, Int(a), Int(b)) => Ok(Int(a.wrapping_add(b))),
        (Sub, Int(a), Int(b)) => Ok(Int(a.wrapping_sub(b))),
        (Mul, Int(a), Int(b)) => Ok(Int(a.wrapping_mul(b))),
        (Div, Int(_), Int(0)) | (Mod, Int(_), Int(0)) => Err(RuntimeError::DivisionByZero),
        (Div, Int(a), Int(b)) => Ok(Int(a.wrapping_div(b))),
        (Mod, Int(a), Int(b)) => Ok(Int(a.wrapping_rem(b))),

        (Add, Str(a), Str(b)) => Ok(Str(a + &b)),

        (Add | Sub | Mul | Div | Mod, a, b) => match (as_float(&a), as_float(&b)) {
            (Some(a), Some(b)) => Ok(Float(match operator {
                Add => a + b,
                Sub => a - b,
                Mul => a * b,
                Div => a / b,
                Mod => a % b,
                _ => unreachable!(),
            })),
            _ => Err(RuntimeError::BinaryOperator {
                operator,
                operand: (a.value_type(), b.value_type()),
            }),
        },

        (Eq, a, b) => Ok(Bool(value_eq(&a, &b))),
        (NotEq, a, b) => Ok(Bool(!value_eq(&a, &b))),

        (Lt | LtEq | Gt | GtEq, a, b) => {
            let ordering = match (&a, &b) {
                (Str(a), Str(b)) => Some(a.cmp(b)),
                _ => match (as_float(&a), as_float(&b)) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ => {
                        return Err(RuntimeError::BinaryOperator {
                            operator,
                            operand: (a.value_type(), b.value_type()),
                        })
                    }
                },
            };
            let holds = ordering.is_some_and(|ordering| match operator {
                Lt => ordering.is_lt(),
                LtEq => ordering.is_le(),
                Gt => ordering.is_gt(),
                GtEq => ordering.is_ge(),
                _ => unreachable!(),
            });
            Ok(Bool(holds))
        }

        // `and` / `or` short-circuit in `eval_expr` and never reach here.
        (And | Or, ..) => unreachable!(),
    }
}

/// Numeric view of a value, promoting int to float.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        #[allow(clippy::cast_precision_loss)]
        Value::Int(v) => Some(*v as f64),
        Value::Float(v) => Some(*v),
        _ => None,
    }
}

/// Equality across values; int and float compare numerically, values of
/// otherwise different types are simply unequal.
fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
            #[allow(clippy::cast_precision_loss)]
            let a = *a as f64;
            a == *b
        }
        _ => a == b,
    }
}
