/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors include expected-token mismatches, tokens with no
/// prefix parse rule, and lexically invalid input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, operator and index type mismatches,
/// arity mismatches, division by zero, and non-hashable hash keys.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
