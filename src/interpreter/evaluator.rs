/// Builtin functions provided by the interpreter.
///
/// Declares the static builtin table (`len`, `first`, `last`, `rest`,
/// `push`, `assert`), their exact arities, and the lookup used when
/// identifier resolution misses the environment chain.
pub mod builtin;
/// Array and hash semantics.
///
/// Implements array and hash literal construction (fail-fast, left to
/// right) and the index operator over arrays and hashes.
pub mod collection;
/// The evaluation engine.
///
/// Declares the `Evaluator`, the `EvalResult` alias, and the evaluation of
/// programs, blocks, statements, and the expression dispatch, including
/// identifier lookup, literals, conditionals, and function literals.
pub mod core;
/// The environment: a chain of lexical scopes.
///
/// Each scope owns its bindings and optionally references an enclosing
/// scope. Lookup walks outward; insertion is always local, so shadowing is
/// the only way an inner `let` affects an outer name.
pub mod env;
/// Function call semantics.
///
/// Implements call evaluation: callee and argument evaluation, arity
/// checking, closure scope creation, and return-signal absorption.
pub mod function;
/// Infix operator semantics.
///
/// Implements arithmetic, comparison, equality, and string concatenation,
/// with typed errors for unsupported operand combinations.
pub mod infix;
/// Prefix operator semantics.
///
/// Implements boolean negation, integer negation, and unary plus.
pub mod prefix;
