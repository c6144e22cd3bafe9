use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::evaluator::{builtin::Builtin, core::EvalResult, env::Env},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type that can appear in expressions, bindings,
/// function returns, and conditions. Collection payloads are reference
/// counted so that values stay cheap to clone as they move through the
/// evaluator.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// An immutable string.
    Str(String),
    /// A boolean value (`true` or `false`).
    ///
    /// Produced by comparison operators and boolean literals. This is the
    /// only type accepted as an `if` condition or `!` operand; no other
    /// value is coerced to a boolean.
    Bool(bool),
    /// An ordered array of values.
    Array(Rc<Vec<Value>>),
    /// A mapping from hashable keys to values.
    ///
    /// Keys are compared by structural equality and restricted to the
    /// [`HashKey`] variants. Later duplicate keys in a literal overwrite
    /// earlier ones.
    Hash(Rc<HashMap<HashKey, Value>>),
    /// A user-defined function together with its captured environment.
    ///
    /// The environment reference is shared with the scope that was active
    /// at the function's definition site; this is what makes closures
    /// lexical rather than dynamic.
    Func {
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body.
        body:   Block,
        /// The environment captured at the definition site.
        env:    Rc<RefCell<Env>>,
        /// The name the function was bound to by `let`, if any.
        name:   Option<String>,
    },
    /// A native function provided by the interpreter.
    Builtin(&'static Builtin),
    /// The absence of a value.
    Null,
    /// The result of a `return` statement on its way out of nested blocks.
    ///
    /// Internal propagation wrapper: absorbed at the nearest function-call
    /// boundary (or the program boundary) and never observable in the
    /// result of a correct program.
    Return(Box<Value>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns the value's type name as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::Str(_) => "String",
            Self::Bool(_) => "Bool",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Func { .. } => "Function",
            Self::Builtin(_) => "Builtin",
            Self::Null => "Null",
            Self::Return(inner) => inner.type_name(),
        }
    }

    /// Converts the value to a hash key, or returns an error if the value
    /// is not hashable.
    ///
    /// Only integers, strings, and booleans may be used as hash keys.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(HashKey)`: The key for a hashable value.
    /// - `Err(RuntimeError::UnhashableKey)`: For every other variant.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::{HashKey, Value};
    ///
    /// let key = Value::Int(7).hash_key(1).unwrap();
    /// assert_eq!(key, HashKey::Int(7));
    ///
    /// assert!(Value::Null.hash_key(1).is_err());
    /// ```
    pub fn hash_key(&self, line: usize) -> EvalResult<HashKey> {
        match self {
            Self::Int(n) => Ok(HashKey::Int(*n)),
            Self::Str(s) => Ok(HashKey::Str(s.clone())),
            Self::Bool(b) => Ok(HashKey::Bool(*b)),
            _ => Err(RuntimeError::UnhashableKey { found: self.type_name().to_string(),
                                                   line }),
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the internal return-signal wrapper.
    ///
    /// A return signal is never an operand, element, key, or binding: any
    /// evaluation consuming sub-expression values must pass it through
    /// unchanged so it keeps propagating until a call or program boundary
    /// absorbs it.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            // Functions are equal only when they are the same closure: the
            // same captured environment, parameters, and body.
            (Self::Func { params: lp, body: lb, env: le, .. },
             Self::Func { params: rp, body: rb, env: re, .. }) => {
                Rc::ptr_eq(le, re) && lp == rp && lb == rb
            },
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Null, Self::Null) => true,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

/// A hashable key in a hash value.
///
/// Restricted to the value variants with structural equality cheap enough
/// to hash: integers, strings, and booleans. The derived ordering gives
/// hash display a deterministic key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
    /// A boolean key.
    Bool(bool),
}

impl From<&HashKey> for Value {
    fn from(key: &HashKey) -> Self {
        match key {
            HashKey::Int(n) => Self::Int(*n),
            HashKey::Str(s) => Self::Str(s.clone()),
            HashKey::Bool(b) => Self::Bool(*b),
        }
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                // Hash iteration order is arbitrary; sort the keys so the
                // printed form is deterministic.
                let mut entries: Vec<(&HashKey, &Value)> = pairs.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));

                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Func { params, name, .. } => {
                write!(f, "fn ")?;
                if let Some(name) = name {
                    write!(f, "{name}")?;
                }
                write!(f, "({})", params.join(", "))
            },
            Self::Builtin(builtin) => write!(f, "builtin function `{}`", builtin.name),
            Self::Null => write!(f, "null"),
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
