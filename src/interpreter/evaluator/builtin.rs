use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::core::Value}};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number of the call. The slice length is already checked against the
/// builtin's arity.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A native function provided by the interpreter.
///
/// Builtins live in a static table and are resolved by name only after
/// identifier lookup misses the environment chain, so user bindings shadow
/// them.
#[derive(Debug)]
pub struct Builtin {
    /// The name the builtin is resolved under.
    pub name:  &'static str,
    /// The exact number of arguments the builtin accepts.
    pub arity: usize,
    func:      BuiltinFn,
}

impl Builtin {
    /// Invokes the builtin on evaluated arguments.
    ///
    /// # Errors
    /// - `WrongNumberOfArguments` when the argument count differs from the
    ///   builtin's arity.
    /// - Whatever the builtin itself raises.
    pub fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::WrongNumberOfArguments { expected: self.arity,
                                                              found:    args.len(),
                                                              line });
        }

        (self.func)(args, line)
    }
}

static BUILTIN_TABLE: &[Builtin] = &[
    Builtin { name: "len",    arity: 1, func: len },
    Builtin { name: "first",  arity: 1, func: first },
    Builtin { name: "last",   arity: 1, func: last },
    Builtin { name: "rest",   arity: 1, func: rest },
    Builtin { name: "push",   arity: 2, func: push },
    Builtin { name: "assert", arity: 1, func: assert_fn },
];

/// Finds a builtin by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// `len(x)`: the length of a string (in bytes) or array.
#[allow(clippy::cast_possible_wrap)]
fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Int(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Int(elements.len() as i64)),
        other => Err(invalid_argument("len", "expected String or Array", other, line)),
    }
}

/// `first(a)`: the first element of an array, or `null` when it is empty.
fn first(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(invalid_argument("first", "expected Array", other, line)),
    }
}

/// `last(a)`: the last element of an array, or `null` when it is empty.
fn last(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(invalid_argument("last", "expected Array", other, line)),
    }
}

/// `rest(a)`: a new array with everything after the first element, or
/// `null` when the array is empty.
fn rest(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(invalid_argument("rest", "expected Array", other, line)),
    }
}

/// `push(a, v)`: a new array with `v` appended. The original array is not
/// mutated.
fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut pushed = elements.as_ref().clone();
            pushed.push(args[1].clone());
            Ok(Value::Array(Rc::new(pushed)))
        },
        other => Err(invalid_argument("push", "expected Array", other, line)),
    }
}

/// `assert(b)`: `null` when given `true`, an assertion failure when given
/// `false`. Anything else is a type error, not a failed assertion.
fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Bool(true) => Ok(Value::Null),
        Value::Bool(false) => Err(RuntimeError::AssertionFailed { line }),
        other => Err(invalid_argument("assert", "expected Bool", other, line)),
    }
}

fn invalid_argument(builtin: &str, expected: &str, found: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidArgument { builtin: builtin.to_string(),
                                    details: format!("{expected}, found {}", found.type_name()),
                                    line }
}
