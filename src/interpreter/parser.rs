/// Brace-delimited block parsing.
///
/// Parses the statement sequences found in `if` branches and function
/// bodies.
pub mod block;
/// Collection literal parsing.
///
/// Parses array literals, hash literals, and the comma-separated
/// expression lists shared with call arguments.
pub mod collection;
/// Parser state and the precedence-climbing expression loop.
///
/// Declares the `Parser` (current + lookahead token state over the token
/// stream), the precedence ladder, and `parse_expr`, the Pratt dispatch
/// combining prefix rules with the infix loop.
pub mod core;
/// Expression parse rules.
///
/// The prefix rules (identifiers, literals, prefix operators, grouped
/// expressions, `if`, function literals) and the infix rules (operator
/// applications, calls, indexing).
pub mod expression;
/// Statement parsing.
///
/// Dispatches on the current token to `let`, `return`, `import`, blank,
/// and expression statements, each with an optional trailing semicolon.
pub mod statement;
