#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are ordinary values to the embedding caller: evaluation
/// stops at the first error in left-to-right order and the error is
/// returned, but the interpreter itself remains usable.
pub enum RuntimeError {
    /// Looked up an identifier with no binding in scope.
    UnknownIdentifier {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A prefix operator was applied to an operand of the wrong type.
    PrefixTypeMismatch {
        /// The operator symbol.
        op:      String,
        /// The type name of the operand.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An infix operator was applied to an unsupported operand combination.
    InfixTypeMismatch {
        /// The operator symbol.
        op:    String,
        /// The type name of the left operand.
        left:  String,
        /// The type name of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `if` condition evaluated to something other than a boolean.
    NonBoolCondition {
        /// The type name of the condition value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call expression's callee is not a function or builtin.
    NotCallable {
        /// The type name of the callee value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A hash key evaluated to a value that cannot be hashed.
    UnhashableKey {
        /// The type name of the key value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index operation was applied to unsupported types.
    IndexTypeMismatch {
        /// The type name of the value being indexed.
        target: String,
        /// The type name of the index value.
        index:  String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic operation overflowed the 64-bit integer range.
    ArithmeticOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received an argument of the wrong type.
    InvalidArgument {
        /// The name of the builtin.
        builtin: String,
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `assert` builtin received `false`.
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `import` statement was evaluated. Imports are recognized by the
    /// grammar but have no resolution semantics.
    ImportUnsupported {
        /// The name of the module the script tried to import.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, line } => {
                write!(f, "Error on line {line}: identifier not found: {name}.")
            },

            Self::PrefixTypeMismatch { op, operand, line } => write!(f,
                                                                     "Error on line {line}: unsupported operand type for prefix `{op}`: {operand}."),

            Self::InfixTypeMismatch { op, left, right, line } => write!(f,
                                                                        "Error on line {line}: unsupported operand types for `{op}`: {left} and {right}."),

            Self::NonBoolCondition { found, line } => write!(f,
                                                             "Error on line {line}: condition must be a boolean, found {found}."),

            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: {found} is not callable.")
            },

            Self::WrongNumberOfArguments { expected, found, line } => write!(f,
                                                                             "Error on line {line}: wrong number of arguments: expected {expected}, got {found}."),

            Self::UnhashableKey { found, line } => {
                write!(f, "Error on line {line}: unusable as hash key: {found}.")
            },

            Self::IndexTypeMismatch { target, index, line } => write!(f,
                                                                      "Error on line {line}: index operator not supported: {target}[{index}]."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: division by zero."),

            Self::ArithmeticOverflow { line } => {
                write!(f, "Error on line {line}: integer overflow.")
            },

            Self::InvalidArgument { builtin, details, line } => write!(f,
                                                                       "Error on line {line}: invalid argument to `{builtin}`: {details}."),

            Self::AssertionFailed { line } => write!(f, "Error on line {line}: assertion failed."),

            Self::ImportUnsupported { name, line } => write!(f,
                                                             "Error on line {line}: cannot import \"{name}\": imports are not supported."),
        }
    }
}

impl std::error::Error for RuntimeError {}
