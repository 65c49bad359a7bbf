//! Host-side functions exposed to glue code.

use rustc_hash::FxHashMap;

use crate::errors::RuntimeError;
use crate::interp::Env;
use crate::value::{NativeFunction, Value, ValueType};

/// Global the bootstrap activation sets as its observable marker.
pub const ACTIVATED_MARKER: &str = "glue_activated";

macro_rules! check_arity {
    ($name:expr, $args:expr, $required:expr) => {
        if $args.len() != $required {
            return Err(RuntimeError::Arity {
                name: $name,
                required: $required,
                given: $args.len(),
            });
        }
    };
}

fn native(name: &'static str, func: fn(Vec<Value>, &mut Env) -> Result<Value, RuntimeError>) -> Value {
    Value::Function(NativeFunction { name, func })
}

/// The bindings a fresh engine starts with.
///
/// Only `activate` is available before the bootstrap runs; everything else
/// the host offers is installed by the activation itself.
pub fn builtin_variables() -> FxHashMap<String, Value> {
    let mut t = FxHashMap::default();
    t.insert(
        "activate".to_string(),
        native("activate", |args, env| {
            check_arity!("activate", args, 0);
            for (name, value) in host_variables() {
                env.set(name, value);
            }
            env.set(ACTIVATED_MARKER, Value::Bool(true));
            Ok(Value::Null)
        }),
    );
    t
}

/// The host functions installed by `activate`.
pub fn host_variables() -> FxHashMap<String, Value> {
    let mut t = FxHashMap::default();
    t.insert(
        "type".to_string(),
        native("type", |args, _| {
            check_arity!("type", args, 1);
            Ok(Value::Str(args[0].value_type().to_string()))
        }),
    );
    t.insert(
        "str".to_string(),
        native("str", |args, _| {
            check_arity!("str", args, 1);
            Ok(Value::Str(args[0].to_string()))
        }),
    );
    t.insert(
        "int".to_string(),
        native("int", |args, _| {
            check_arity!("int", args, 1);
            let value = match &args[0] {
                Value::Int(v) => Value::Int(*v),
                #[allow(clippy::cast_possible_truncation)]
                Value::Float(v) => Value::Int(*v as i64),
                Value::Bool(v) => Value::Int(i64::from(*v)),
                Value::Str(v) => {
                    v.trim()
                        .parse()
                        .map(Value::Int)
                        .map_err(|_| RuntimeError::Convert {
                            from: ValueType::Str,
                            to: ValueType::Int,
                        })?
                }
                value => {
                    return Err(RuntimeError::Convert {
                        from: value.value_type(),
                        to: ValueType::Int,
                    })
                }
            };
            Ok(value)
        }),
    );
    t.insert(
        "len".to_string(),
        native("len", |args, _| {
            check_arity!("len", args, 1);
            match &args[0] {
                Value::Str(v) => Ok(Value::Int(v.chars().count() as i64)),
                value => Err(RuntimeError::Convert {
                    from: value.value_type(),
                    to: ValueType::Int,
                }),
            }
        }),
    );
    t.insert(
        "abs".to_string(),
        native("abs", |args, _| {
            check_arity!("abs", args, 1);
            match &args[0] {
                Value::Int(v) => Ok(Value::Int(v.wrapping_abs())),
                Value::Float(v) => Ok(Value::Float(v.abs())),
                value => Err(RuntimeError::UnaryOperator {
                    operator: crate::compiler::ast::UnOp::Neg,
                    operand: value.value_type(),
                }),
            }
        }),
    );
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::interp::eval_chunk;

    fn activated_env() -> Env {
        let mut env = Env::new();
        env.globals.extend(builtin_variables());
        eval_chunk(&mut env, &compile("activate()").unwrap()).unwrap();
        env
    }

    fn eval_str(env: &mut Env, input: &str) -> Result<Value, RuntimeError> {
        eval_chunk(env, &compile(input).unwrap())
    }

    #[test]
    fn activate_sets_marker_and_installs_hosts() {
        let mut env = activated_env();
        assert_eq!(
            eval_str(&mut env, ACTIVATED_MARKER).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eval_str(&mut env, "type(1)").unwrap(),
            Value::Str("int".to_string())
        );
    }

    #[test]
    fn host_functions_are_absent_before_activation() {
        let mut env = Env::new();
        env.globals.extend(builtin_variables());
        let err = eval_str(&mut env, "len(\"abc\")").unwrap_err();
        assert!(matches!(err, RuntimeError::UnboundName { .. }));
    }

    #[test]
    fn conversions() {
        let mut env = activated_env();
        assert_eq!(eval_str(&mut env, "int(\" 42 \")").unwrap(), Value::Int(42));
        assert_eq!(eval_str(&mut env, "int(2.9)").unwrap(), Value::Int(2));
        assert_eq!(
            eval_str(&mut env, "str(1 + 1)").unwrap(),
            Value::Str("2".to_string())
        );
        assert_eq!(eval_str(&mut env, "len(\"héllo\")").unwrap(), Value::Int(5));
        assert_eq!(eval_str(&mut env, "abs(0 - 7)").unwrap(), Value::Int(7));
    }

    #[test]
    fn arity_is_checked() {
        let mut env = activated_env();
        let err = eval_str(&mut env, "len()").unwrap_err();
        assert_eq!(
            err,
            RuntimeError::Arity {
                name: "len",
                required: 1,
                given: 0
            }
        );
    }

    #[test]
    fn int_of_garbage_errors() {
        let mut env = activated_env();
        let err = eval_str(&mut env, "int(\"x\")").unwrap_err();
        assert!(matches!(err, RuntimeError::Convert { .. }));
    }
}
